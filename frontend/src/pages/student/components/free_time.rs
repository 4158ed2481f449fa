use crate::{
    api::FreeTimeSuggestion,
    components::{cards::Panel, common::Badge},
};
use leptos::*;

#[component]
pub fn FreeTimeSuggestions(suggestions: Vec<FreeTimeSuggestion>) -> impl IntoView {
    view! {
        <Panel
            title="Free Time Suggestions"
            description="Make the most of your free periods with these productive activities"
        >
            <ul class="space-y-3">
                {suggestions
                    .into_iter()
                    .map(|suggestion| view! {
                        <li class="flex items-center justify-between p-4 border border-border rounded-lg">
                            <div>
                                <h4 class="font-medium text-fg">{suggestion.activity}</h4>
                                <p class="text-sm text-fg-muted">{suggestion.description}</p>
                            </div>
                            <Badge class="border border-border text-fg">{suggestion.time}</Badge>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Panel>
    }
}
