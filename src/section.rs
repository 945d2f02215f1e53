//! Section skip state machine.

/// Search state of the section gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Searching,
    Suspended,
}

/// Gates which lines reach the classifier.
///
/// A line containing the disable flag suspends the search and is itself
/// skipped. While suspended, a line containing the reenable flag resumes
/// the search and is itself evaluated.
#[derive(Debug, Clone)]
pub struct SectionGate {
    disable: Option<String>,
    reenable: Option<String>,
    state: SectionState,
}

impl SectionGate {
    pub fn new(disable: Option<String>, reenable: Option<String>) -> Self {
        Self {
            disable,
            reenable,
            state: SectionState::Searching,
        }
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Advance on a line. Returns `true` when the line should be classified.
    pub fn admit(&mut self, line: &str) -> bool {
        match self.state {
            SectionState::Searching => match &self.disable {
                Some(flag) if line.contains(flag.as_str()) => {
                    log::debug!("search suspended at {:?}", line);
                    self.state = SectionState::Suspended;
                    false
                }
                _ => true,
            },
            SectionState::Suspended => match &self.reenable {
                Some(flag) if line.contains(flag.as_str()) => {
                    log::debug!("search resumed at {:?}", line);
                    self.state = SectionState::Searching;
                    true
                }
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(disable: Option<&str>, reenable: Option<&str>) -> SectionGate {
        SectionGate::new(disable.map(String::from), reenable.map(String::from))
    }

    #[test]
    fn test_no_flags_admits_everything() {
        let mut g = gate(None, None);
        for line in ["a", "START-SKIP", "b"] {
            assert!(g.admit(line));
        }
        assert_eq!(g.state(), SectionState::Searching);
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut g = gate(Some("START-SKIP"), Some("END-SKIP"));
        assert!(g.admit("permit ip any any"));
        assert!(!g.admit("! START-SKIP here"));
        assert_eq!(g.state(), SectionState::Suspended);
        assert!(!g.admit("permit ip any host 1.1.1.1"));
        assert!(g.admit("! END-SKIP permit ip any any"));
        assert_eq!(g.state(), SectionState::Searching);
        assert!(g.admit("permit ip any host 2.2.2.2"));
    }

    #[test]
    fn test_suspend_without_reenable_is_final() {
        let mut g = gate(Some("STOP"), None);
        assert!(!g.admit("STOP"));
        assert!(!g.admit("permit ip any any"));
        assert!(!g.admit("END"));
        assert_eq!(g.state(), SectionState::Suspended);
    }

    #[test]
    fn test_reenable_only_has_no_effect() {
        let mut g = gate(None, Some("END"));
        assert!(g.admit("END"));
        assert!(g.admit("permit ip any any"));
    }

    #[test]
    fn test_same_flag_toggles() {
        let mut g = gate(Some("MARK"), Some("MARK"));
        assert!(!g.admit("MARK 1"));
        assert!(g.admit("MARK 2"));
        assert!(!g.admit("MARK 3"));
    }
}
