use super::requests::AnalyzeMode;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analyzer.ts")]
pub struct ExtractTextResponse {
    pub file_name: String,
    pub text: String,
    pub characters: usize,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analyzer.ts")]
pub struct ProcessDocumentResponse {
    pub mode: AnalyzeMode,
    pub result: String,
}
