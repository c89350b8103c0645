/// Tunables for the MAINT solver. See SPEC_FULL.md §4.1 for the semantics of each field.
#[derive(Debug, Clone, Copy)]
pub struct MaintConfig {
    /// When `false`, non-JMB aircraft are also forbidden from occupying 4-adjacent positions
    /// within the same slot (an ambiguity in the source material, exposed here as a flag
    /// instead of a hard-coded choice; see DESIGN.md OQ-2).
    pub allow_non_jmb_adjacency: bool,
    /// Maximum number of distinct solutions returned by `Solution::solutions`.
    /// `Solution::total_count` always reports the untruncated total.
    pub solution_cap: usize,
}

impl Default for MaintConfig {
    fn default() -> Self {
        MaintConfig {
            allow_non_jmb_adjacency: true,
            solution_cap: 100,
        }
    }
}
