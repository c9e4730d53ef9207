use nutrilens::state::SearchState;

/// Text rendition of the search screen below the input line.
pub fn render_state(state: &SearchState) -> String {
    let mut out = Vec::new();

    if state.is_loading() {
        out.push("Loading...".to_string());
    }
    if let Some(error) = state.error() {
        out.push(format!("! {error}"));
    }

    let cards = state.cards();
    if cards.is_empty() {
        if state.error().is_none() {
            out.push("No results yet. Try `search <food>`.".to_string());
        }
    } else {
        out.push(format!("Unit: {} ({})", state.unit(), state.unit().label()));
        for card in cards {
            out.push(String::new());
            out.push(card.to_string());
        }
    }

    out.join("\n")
}

// region:    --- Tests


// endregion: --- Tests
