//! System prompt assembly.

/// Build the system prompt from the logistics dataset.
///
/// Pure and deterministic; the prompt is constructed once per process and
/// shared read-only across every conversation.
pub fn build_system_prompt(dataset: &str) -> String {
    format!(
        "You are a logistics analyst for Marine Expeditionary Unit (MEU) operations.\n\
         \n\
         Use the data below to answer questions. Always reference specific numbers with units.\n\
         \n\
         --- MEU LOGISTICS DATA ---\n\
         {dataset}\n\
         --- END DATA ---\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_dataset_verbatim() {
        let dataset = "Fuel: 500 gal/day";
        let prompt = build_system_prompt(dataset);
        assert!(prompt.contains(dataset));
        assert!(prompt.contains("logistics analyst"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let dataset = "category,item,value\nfuel,daily,8500";
        assert_eq!(build_system_prompt(dataset), build_system_prompt(dataset));
    }

    #[test]
    fn test_empty_dataset_still_yields_a_prompt() {
        let prompt = build_system_prompt("");
        assert!(prompt.contains("--- MEU LOGISTICS DATA ---"));
        assert!(prompt.contains("--- END DATA ---"));
    }
}
