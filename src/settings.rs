//! Parser configuration (spec.md §4.1, §6).

/// Recognized configuration for a parse. Mirrors the two settings
/// `spec.md` calls out, plus an ambient recursion guard (`max_depth`)
/// matching the teacher's `recursion_fuel_limit` builder knob.
#[derive(Debug, Clone, Copy)]
pub struct ParserSettings {
    /// How many columns a `\t` contributes when comparing indentation.
    /// Must be >= 1; `spec.md` §4.1.
    tab_spaces_cost: u32,
    /// When `false`, a carriage return is folded into surrounding
    /// whitespace instead of becoming its own trivia token.
    pub treat_cr_as_token: bool,
    /// Optional cap on reader-stack depth. `None` means unbounded, which is
    /// the default — the core is not required to reject deeply nested
    /// input, but callers embedding it in a service may want a guard.
    pub max_depth: Option<u32>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            tab_spaces_cost: 4,
            treat_cr_as_token: true,
            max_depth: None,
        }
    }
}

impl ParserSettings {
    pub fn tab_spaces_cost(&self) -> u32 {
        self.tab_spaces_cost
    }

    /// Sets the tab cost. Values below 1 are clamped to 1 — the core never
    /// panics on caller-supplied settings.
    pub fn with_tab_spaces_cost(mut self, cost: u32) -> Self {
        self.tab_spaces_cost = cost.max(1);
        self
    }

    pub fn with_treat_cr_as_token(mut self, treat_cr_as_token: bool) -> Self {
        self.treat_cr_as_token = treat_cr_as_token;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
