//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::CompileError;
use crate::render;
use crate::validate::ValidationReport;

/// Validate a workflow JSON: parse + graph validation.
/// Returns `{status: "report", ...}` or `{status: "errors", errors: [...]}`.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> ValidateResult {
    match crate::graph::parse(json) {
        Ok(workflow) => ValidateResult::Report(crate::validate::validate(&workflow)),
        Err(errors) => ValidateResult::Errors {
            errors: errors.iter().map(ErrorDto::from).collect(),
        },
    }
}

/// Full pipeline: parse → compile → render both artifacts.
/// Returns `{status: "success", files: [...]}` or `{status: "errors", ...}`.
#[wasm_bindgen]
pub fn compile_workflow(json: &str) -> JsValue {
    let result = compile_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_workflow_inner(json: &str) -> CompileResult {
    let workflow = match crate::graph::parse(json) {
        Ok(w) => w,
        Err(errors) => {
            return CompileResult::Errors {
                errors: errors.iter().map(ErrorDto::from).collect(),
            };
        }
    };

    let config = match crate::compile::compile(&workflow) {
        Ok(c) => c,
        Err(errors) => {
            return CompileResult::Errors {
                errors: errors.iter().map(ErrorDto::from).collect(),
            };
        }
    };

    CompileResult::Success {
        files: vec![
            FileDto {
                path: "crew.yaml".into(),
                content: render::render_yaml(&config),
            },
            FileDto {
                path: "crew.py".into(),
                content: render::render_python(&config),
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    kind: String,
    message: String,
}

impl From<&CompileError> for ErrorDto {
    fn from(e: &CompileError) -> Self {
        ErrorDto {
            kind: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct FileDto {
    path: String,
    content: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ValidateResult {
    #[serde(rename = "report")]
    Report(ValidationReport),
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { files: Vec<FileDto> },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
