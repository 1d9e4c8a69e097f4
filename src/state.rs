use crate::history::PromptHistory;
use crate::refine::GeneratedResult;
use crate::selection::SelectionState;

/// All state owned by one session: the editable selection, the last
/// generated result, the recall history and the per-pipeline busy flags.
#[derive(Debug, Default)]
pub struct Session {
    pub selection: SelectionState,
    pub history: PromptHistory,
    pub generated: Option<GeneratedResult>,
    pub thinking_mode: bool,
    refining: bool,
    analyzing: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Claims the refinement pipeline. A second generation request while
    /// one is pending is refused, not queued.
    pub fn begin_refine(&mut self) -> bool {
        if self.refining {
            return false;
        }
        self.refining = true;
        true
    }

    pub fn finish_refine(&mut self) {
        self.refining = false;
    }

    pub fn begin_analyze(&mut self) -> bool {
        if self.analyzing {
            return false;
        }
        self.analyzing = true;
        true
    }

    pub fn finish_analyze(&mut self) {
        self.analyzing = false;
    }

    /// Stores a completed generation and records it for recall.
    pub fn complete_generation(&mut self, result: GeneratedResult) {
        self.history.record(result.main_text.clone());
        self.generated = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_flags_refuse_a_second_claim() {
        let mut session = Session::new();
        assert!(session.begin_refine());
        assert!(!session.begin_refine());
        session.finish_refine();
        assert!(session.begin_refine());

        assert!(session.begin_analyze());
        assert!(!session.begin_analyze());
        session.finish_analyze();
        assert!(session.begin_analyze());
    }

    #[test]
    fn completing_a_generation_records_history() {
        let mut session = Session::new();
        session.complete_generation(GeneratedResult {
            main_text: "a prompt".to_string(),
            negative_text: "a negative".to_string(),
            refined: false,
        });
        assert_eq!(session.history.entries(), ["a prompt"]);
        assert_eq!(session.generated.as_ref().unwrap().main_text, "a prompt");
    }
}
