//! AI consultation over a finished report.
//!
//! Consultation is an optional step after an investigation: it reads the
//! report and never feeds back into report construction, so a slow or
//! failed consultation cannot block or corrupt the evidence. The actual
//! text generation sits behind [`Consultant`], keeping the crate free of
//! any network or vendor surface.

use crate::error::Result;
use crate::report::{EvidenceReport, TypeFindings};
use tracing::{debug, warn};

/// Most string samples forwarded to a consultant.
pub const MAX_SAMPLE_ITEMS: usize = 20;
/// Character cap for each forwarded sample.
pub const MAX_ITEM_CHARS: usize = 200;
/// Character cap for whole-text samples and other long strings.
pub const MAX_TEXT_CHARS: usize = 2000;

/// A text-generation backend for consultations.
///
/// Implementations call whatever service they like; failures come back as
/// [`CasefileError::Consultation`](crate::error::CasefileError::Consultation)
/// and are folded into the answer string by [`consult`].
pub trait Consultant {
    /// Generate analysis text for `prompt` using `model`.
    fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}

/// Ask `consultant` to brief the user on an investigated file.
///
/// Always returns displayable text: on failure the answer is a formatted
/// error line naming the model, never a propagated error.
pub fn consult<C: Consultant + ?Sized>(
    consultant: &C,
    model: &str,
    report: &EvidenceReport,
) -> String {
    let prompt = match consultation_prompt(report) {
        Ok(prompt) => prompt,
        Err(e) => return format!("AI 오류 ({}): {}", model, e),
    };
    debug!(
        model,
        prompt_chars = prompt.chars().count(),
        "requesting consultation"
    );
    match consultant.generate(model, &prompt) {
        Ok(answer) => answer,
        Err(e) => {
            warn!(model, error = %e, "consultation failed");
            format!("AI 오류 ({}): {}", model, e)
        }
    }
}

/// Build the briefing prompt around the trimmed report.
pub fn consultation_prompt(report: &EvidenceReport) -> Result<String> {
    let evidence = trim_report(report).to_json_pretty()?;
    Ok(format!(
        "당신은 20년 경력의 디지털 포렌식 전문가입니다.\n\
         아래 파일 증거 보고서를 검토하고, 의뢰인에게 이 파일이 무엇인지 브리핑해 주세요.\n\
         \n\
         [증거 보고서]\n\
         {evidence}\n\
         \n\
         [브리핑 형식]\n\
         1. 파일의 정체: 이 파일이 무엇인지 한두 문장으로 설명\n\
         2. 출처 추정: 어디에서 왔을 가능성이 높은지\n\
         3. 위험도 평가: 낮음/보통/높음 중 하나와 그 근거\n\
         4. 권장 조치: 의뢰인이 취해야 할 다음 행동\n"
    ))
}

/// Copy of `report` with long string evidence cut down to the forwarding
/// caps. The original report is never modified.
pub fn trim_report(report: &EvidenceReport) -> EvidenceReport {
    let mut trimmed = report.clone();
    if let TypeFindings::InternalStrings(samples) = &report.findings {
        trimmed.findings = TypeFindings::InternalStrings(trim_samples(samples));
    }
    trimmed.neighborhood = trim_items(&report.neighborhood);
    trimmed.trace_link = truncate_chars(&report.trace_link, MAX_TEXT_CHARS).to_string();
    trimmed
}

/// A single sample is the whole-text form and keeps the long cap; anything
/// else is run extraction and gets the per-item caps.
fn trim_samples(samples: &[String]) -> Vec<String> {
    match samples {
        [text] => vec![truncate_chars(text, MAX_TEXT_CHARS).to_string()],
        _ => trim_items(samples),
    }
}

fn trim_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .take(MAX_SAMPLE_ITEMS)
        .map(|item| truncate_chars(item, MAX_ITEM_CHARS).to_string())
        .collect()
}

/// Truncate to at most `max_chars` characters, never splitting a character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
