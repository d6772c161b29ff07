use std::path::PathBuf;

use natives_codegen::{
    generate_all, CodegenError, Dialect, DocumentGenerator, GenerateOptions, TypeSite,
};
use natives_model::{Document, Function, Module, NativeType, Parameter, ReturnType};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load(fixture: &str) -> Document {
    let path = fixtures_dir().join(fixture);
    natives_model::load_document(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}': {}", fixture, e))
}

fn golden_options() -> GenerateOptions {
    GenerateOptions::new()
        .timestamp("2024-01-01 00:00")
        .custom_header_lines([" eslint-disable"])
}

/// Tabs rendered as four spaces so snapshots stay readable.
fn shot(output: &str) -> String {
    output.replace('\t', "    ")
}

#[test]
fn test_fixture_is_valid() {
    let report = natives_model::validate(&load("natives.json"));
    assert!(report.ok, "{:?}", report.errors);
    assert!(report.errors.is_empty());
}

#[test]
fn test_golden_typescript_declarations() {
    let doc = load("natives.json");
    let output = DocumentGenerator::new(Dialect::TypeScript, golden_options())
        .generate(&doc)
        .unwrap();

    insta::assert_snapshot!(shot(&output), @r#"
    // THIS FILE IS AUTOGENERATED by natives-typegen
    // Generated 2024-01-01 00:00
    // eslint-disable

    interface Vector3 {
      x: number;
      y: number;
      z: number;
    }

    type MemoryBuffer = object;

    declare module "natives" {
        /**
        * Pauses the current script.
        * @param ms Milliseconds to pause.
        */
        export function wait(ms: number): void;
        export function getEntityCoords(entity: number, alive: boolean): Vector3;
        export function getGroundZFor3dCoord(x: number, y: number, z: number): [boolean, number];
    }
    "#);
}

#[test]
fn test_golden_csharp_bindings() {
    let doc = load("natives.json");
    let output = DocumentGenerator::new(Dialect::CSharp, golden_options())
        .generate(&doc)
        .unwrap();

    insta::assert_snapshot!(shot(&output), @r#"
    // THIS FILE IS AUTOGENERATED by natives-typegen
    // Generated 2024-01-01 00:00
    // eslint-disable

    using WebAssembly;
    using WebAssembly.Core;

    namespace AltV.Net.Client
    {
        public class NativeNatives
        {
            private readonly JSObject native;

            private readonly Function wait;
            private readonly Function getEntityCoords;
            private readonly Function getGroundZFor3dCoord;

            public NativeNatives(JSObject native)
            {
                this.native = native;
                if (wait == null) wait = (Function) native.GetObjectProperty("wait");
                if (getEntityCoords == null) getEntityCoords = (Function) native.GetObjectProperty("getEntityCoords");
                if (getGroundZFor3dCoord == null) getGroundZFor3dCoord = (Function) native.GetObjectProperty("getGroundZFor3dCoord");
            }

            /// <summary>
            /// Pauses the current script.
            /// </summary>
            /// <param name="ms">Milliseconds to pause.</param>
            public void Wait(int ms)
            {
                wait.Call(native, ms);
            }

            public Vector3 GetEntityCoords(int entity, bool alive)
            {
                return (Vector3) getEntityCoords.Call(native, entity, alive);
            }

            /// <summary>
            /// </summary>
            /// <returns>ValueTuple<bool, float></returns>
            public ValueTuple<bool, float> GetGroundZFor3dCoord(float x, float y, float z)
            {
                return (ValueTuple<bool, float>) getGroundZFor3dCoord.Call(native, x, y, z);
            }

        }
    }
    "#);
}

#[test]
fn test_example_scenario_declaration() {
    let doc = Document::new().with_module(
        Module::new("natives").with_function(
            Function::new("GetPlayerHealth", ReturnType::new("number", NativeType::single("Int")))
                .with_param(Parameter::new("playerId", "Int")),
        ),
    );
    let options = GenerateOptions::new().emit_header(false);
    let output = DocumentGenerator::new(Dialect::TypeScript, options)
        .generate(&doc)
        .unwrap();
    assert_eq!(
        output.trim(),
        "declare module \"natives\" {\n\
         \texport function GetPlayerHealth(playerId: number): number;\n\
         }"
    );
    assert!(!output.contains("/**"));
}

#[test]
fn test_order_is_preserved() {
    let module = |name: &str| {
        Module::new(name)
            .with_function(Function::new(format!("{name}First"), ReturnType::void()))
            .with_function(Function::new(format!("{name}Second"), ReturnType::void()))
    };
    let doc = Document::new().with_module(module("alpha")).with_module(module("beta"));

    let output = DocumentGenerator::new(Dialect::TypeScript, GenerateOptions::default())
        .generate(&doc)
        .unwrap();
    let positions: Vec<usize> = [
        "declare module \"alpha\"",
        "alphaFirst",
        "alphaSecond",
        "declare module \"beta\"",
        "betaFirst",
        "betaSecond",
    ]
    .iter()
    .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_generation_is_deterministic() {
    let doc = load("natives.json");
    for dialect in Dialect::ALL {
        let gen = DocumentGenerator::new(dialect, golden_options());
        assert_eq!(gen.generate(&doc).unwrap(), gen.generate(&doc).unwrap());
    }
}

#[test]
fn test_void_functions_never_return() {
    let doc = load("natives.json");
    let cs = DocumentGenerator::new(Dialect::CSharp, GenerateOptions::new().emit_header(false))
        .generate(&doc)
        .unwrap();
    let wait_body = cs
        .split("public void Wait(int ms)")
        .nth(1)
        .and_then(|rest| rest.split("public Vector3").next())
        .unwrap();
    assert!(!wait_body.contains("return"));

    let ts = DocumentGenerator::new(Dialect::TypeScript, GenerateOptions::default())
        .generate(&doc)
        .unwrap();
    assert!(ts.contains("export function wait(ms: number): void;"));
}

#[test]
fn test_documentation_can_be_disabled() {
    let doc = load("natives.json");
    let options = golden_options().generate_documentation(false);
    for dialect in Dialect::ALL {
        let output = DocumentGenerator::new(dialect, options.clone())
            .generate(&doc)
            .unwrap();
        assert!(!output.contains("/**"), "{dialect}");
        assert!(!output.contains("/// <summary>"), "{dialect}");
    }
}

#[test]
fn test_unmapped_token_fails_in_both_dialects() {
    let doc = load("unmapped.json");
    let generators: Vec<DocumentGenerator> = Dialect::ALL
        .iter()
        .map(|&dialect| DocumentGenerator::new(dialect, GenerateOptions::default()))
        .collect();
    let results = generate_all(&doc, &generators);
    for (dialect, result) in Dialect::ALL.into_iter().zip(results) {
        match result {
            Err(CodegenError::UnmappedType {
                dialect: failed,
                function,
                site,
                token,
            }) => {
                assert_eq!(failed, dialect);
                assert_eq!(function, "getEntityQuaternion");
                assert_eq!(site, TypeSite::Return);
                assert_eq!(token, "Quaternion");
            }
            other => panic!("Expected UnmappedType for {dialect}, got: {:?}", other),
        }
    }
}
