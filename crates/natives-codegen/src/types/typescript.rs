use crate::traits::TypeMap;

/// Native token to TypeScript type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypes;

impl TypeMap for TypeScriptTypes {
    fn lookup(&self, token: &str, multi_value: bool) -> Option<&'static str> {
        let ts = match token {
            "Any" => "any",
            "Boolean" => "boolean",
            "String" => "string",
            "Vector3" => "Vector3",
            "MemoryBuffer" => "MemoryBuffer",
            "Int" | "Float" | "Hash" => "number",
            // script handles are plain numbers on the JS side
            "Entity" | "Player" | "Ped" | "Vehicle" | "Object" | "Pickup" | "Blip" | "Cam"
            | "Interior" | "FireId" | "ScrHandle" => "number",
            "Void" if !multi_value => "void",
            _ => return None,
        };
        Some(ts)
    }

    fn container(&self, members: &[&str]) -> String {
        format!("[{}]", members.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(TypeScriptTypes.lookup("Int", false), Some("number"));
        assert_eq!(TypeScriptTypes.lookup("Ped", false), Some("number"));
        assert_eq!(TypeScriptTypes.lookup("Boolean", true), Some("boolean"));
        assert_eq!(TypeScriptTypes.lookup("Void", false), Some("void"));
        assert_eq!(TypeScriptTypes.lookup("Void", true), None);
        assert_eq!(TypeScriptTypes.lookup("int", false), None);
    }

    #[test]
    fn test_container_is_tuple() {
        assert_eq!(TypeScriptTypes.container(&["boolean", "number"]), "[boolean, number]");
    }
}
