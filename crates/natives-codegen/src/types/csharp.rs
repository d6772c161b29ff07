use crate::traits::TypeMap;

/// Native token to C# type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypes;

impl TypeMap for CSharpTypes {
    fn lookup(&self, token: &str, multi_value: bool) -> Option<&'static str> {
        let cs = match token {
            "Any" => "object",
            "Boolean" => "bool",
            "Int" => "int",
            "Float" => "float",
            "Hash" => "uint",
            "String" => "string",
            "Vector3" => "Vector3",
            "MemoryBuffer" => "MemoryBuffer",
            "Entity" | "Player" | "Ped" | "Vehicle" | "Object" | "Pickup" | "Blip" | "Cam"
            | "Interior" | "FireId" | "ScrHandle" => "int",
            "Void" if !multi_value => "void",
            _ => return None,
        };
        Some(cs)
    }

    fn container(&self, members: &[&str]) -> String {
        format!("ValueTuple<{}>", members.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_differs_from_declaration_spelling() {
        assert_eq!(CSharpTypes.lookup("Int", false), Some("int"));
        assert_eq!(CSharpTypes.lookup("Float", false), Some("float"));
        assert_eq!(CSharpTypes.lookup("Hash", false), Some("uint"));
        assert_eq!(CSharpTypes.lookup("Any", false), Some("object"));
        assert_eq!(CSharpTypes.lookup("Void", true), None);
    }

    #[test]
    fn test_container() {
        assert_eq!(CSharpTypes.container(&["int", "float"]), "ValueTuple<int, float>");
    }
}
