use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

/// Output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// TypeScript ambient declarations (`.d.ts`), type-only.
    TypeScript,
    /// C# wrapper class invoking the natives through a JS object handle.
    CSharp,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::TypeScript, Dialect::CSharp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "typescript",
            Dialect::CSharp => "csharp",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typescript" | "ts" | "declaration" => Ok(Dialect::TypeScript),
            "csharp" | "cs" | "c#" | "binding" => Ok(Dialect::CSharp),
            _ => Err(CodegenError::UnknownDialect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("ts".parse::<Dialect>().unwrap(), Dialect::TypeScript);
        assert_eq!("Binding".parse::<Dialect>().unwrap(), Dialect::CSharp);
        assert_eq!("C#".parse::<Dialect>().unwrap(), Dialect::CSharp);
        assert!(matches!(
            "python".parse::<Dialect>(),
            Err(CodegenError::UnknownDialect(name)) if name == "python"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Dialect::CSharp).unwrap(),
            "\"csharp\""
        );
        let dialects: Vec<Dialect> =
            serde_json::from_str(r#"["typescript", "csharp"]"#).unwrap();
        assert_eq!(dialects, Dialect::ALL.to_vec());
        assert!(serde_json::from_str::<Dialect>(r#""TypeScript""#).is_err());
    }
}
