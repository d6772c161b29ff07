pub mod csharp;
pub mod typescript;

use natives_model::{Function, Parameter, ReturnType};

use crate::dialect::Dialect;
use crate::error::{CodegenError, TypeSite};
use crate::traits::TypeMap;

/// Resolved return of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedReturn {
    /// No value is returned; carries the dialect's "no value" spelling.
    Void(&'static str),
    Value(String),
}

impl ResolvedReturn {
    pub fn type_name(&self) -> &str {
        match self {
            ResolvedReturn::Void(name) => *name,
            ResolvedReturn::Value(name) => name.as_str(),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, ResolvedReturn::Void(_))
    }
}

/// Resolves the native types of one function through a dialect's table,
/// attributing failures to that function.
pub struct TypeResolver<'a> {
    map: &'a dyn TypeMap,
    dialect: Dialect,
    function: &'a Function,
}

impl<'a> TypeResolver<'a> {
    pub fn new(map: &'a dyn TypeMap, dialect: Dialect, function: &'a Function) -> Self {
        Self {
            map,
            dialect,
            function,
        }
    }

    fn resolve(
        &self,
        token: &str,
        multi_value: bool,
        site: TypeSite,
    ) -> Result<&'static str, CodegenError> {
        self.map
            .lookup(token, multi_value)
            .ok_or_else(|| CodegenError::UnmappedType {
                dialect: self.dialect,
                function: self.function.name.clone(),
                site,
                token: token.to_string(),
            })
    }

    fn location(&self, site: &TypeSite) -> String {
        format!("function '{}' {}", self.function.name, site)
    }

    /// Type of a parameter. Parameters carry exactly one token.
    pub fn parameter(&self, parameter: &Parameter) -> Result<&'static str, CodegenError> {
        let site = TypeSite::Parameter(parameter.name.clone());
        match parameter.native_type.tokens() {
            [] => Err(CodegenError::malformed(self.location(&site), "empty native type")),
            [token] => self.resolve(token, false, site),
            _ => Err(CodegenError::malformed(
                self.location(&site),
                "multi-value native types are only valid for return types",
            )),
        }
    }

    /// Declared return type: "no value", a single mapped type, or a container.
    pub fn return_type(&self, return_type: &ReturnType) -> Result<ResolvedReturn, CodegenError> {
        let tokens = return_type.native_type.tokens();
        if tokens.is_empty() {
            return Err(CodegenError::malformed(
                self.location(&TypeSite::Return),
                "empty native type",
            ));
        }
        if return_type.is_void() {
            return Ok(ResolvedReturn::Void(self.map.void_type()));
        }
        if let Some(container) = self.return_shape(return_type)? {
            return Ok(ResolvedReturn::Value(container));
        }

        let resolved = self.resolve(&tokens[0], false, TypeSite::Return)?;
        if resolved == self.map.void_type() {
            return Ok(ResolvedReturn::Void(resolved));
        }
        Ok(ResolvedReturn::Value(resolved.to_string()))
    }

    /// Container spelling for a multi-value return, `None` for anything else.
    pub fn return_shape(&self, return_type: &ReturnType) -> Result<Option<String>, CodegenError> {
        if return_type.is_void() || !return_type.is_multi_value() {
            return Ok(None);
        }
        let members = return_type
            .native_type
            .tokens()
            .iter()
            .enumerate()
            .map(|(i, token)| self.resolve(token, true, TypeSite::ReturnMember(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(self.map.container(&members)))
    }
}
