use serde::{Deserialize, Serialize};

/// Return-type name that marks a function as returning nothing.
pub const VOID_RETURN: &str = "void";

/// Every native type token the natives database is known to use.
pub const NATIVE_TYPE_TOKENS: &[&str] = &[
    "Any",
    "Boolean",
    "Int",
    "Float",
    "Hash",
    "String",
    "Vector3",
    "Void",
    "Entity",
    "Player",
    "Ped",
    "Vehicle",
    "Object",
    "Pickup",
    "Blip",
    "Cam",
    "Interior",
    "FireId",
    "ScrHandle",
    "MemoryBuffer",
];

/// A complete native library description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub type_aliases: Vec<TypeAlias>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A named group of functions. The name doubles as the import specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Function>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: ReturnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub native_type: NativeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnType {
    /// `"void"` disables value-returning emission.
    pub name: String,
    pub native_type: NativeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ordered sequence of abstract type tokens.
///
/// More than one token denotes a multi-value return. Serialized as a plain
/// JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeType(pub Vec<String>);

/// Declaration-file interface: `interface Name { prop: Type; }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

/// Declaration-file type alias. The definition is substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    pub definition: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_type_alias(mut self, alias: TypeAlias) -> Self {
        self.type_aliases.push(alias);
        self
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Total number of functions across all modules.
    pub fn function_count(&self) -> usize {
        self.modules.iter().map(|m| m.functions.len()).sum()
    }
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: ReturnType) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            description: None,
        }
    }

    pub fn with_param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_type: NativeType::single(token),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ReturnType {
    /// A return of nothing: name `"void"`, token `Void`.
    pub fn void() -> Self {
        Self {
            name: VOID_RETURN.to_string(),
            native_type: NativeType::single("Void"),
            description: None,
        }
    }

    pub fn new(name: impl Into<String>, native_type: NativeType) -> Self {
        Self {
            name: name.into(),
            native_type,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_void(&self) -> bool {
        self.name == VOID_RETURN
    }

    pub fn is_multi_value(&self) -> bool {
        self.native_type.is_multi_value()
    }
}

impl NativeType {
    pub fn single(token: impl Into<String>) -> Self {
        Self(vec![token.into()])
    }

    pub fn multi<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_multi_value(&self) -> bool {
        self.0.len() > 1
    }
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, type_: impl Into<String>) -> Self {
        self.properties.push(Property {
            name: name.into(),
            type_: type_.into(),
        });
        self
    }
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }
}
