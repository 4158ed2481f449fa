use crate::{
    api::{DailyTask, Difficulty},
    components::{cards::Panel, common::Badge},
};
use leptos::*;

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "bg-status-success-bg text-status-success-text",
        Difficulty::Medium => "bg-status-warning-bg text-status-warning-text",
        Difficulty::Hard => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn DailyTasks(tasks: Vec<DailyTask>) -> impl IntoView {
    view! {
        <Panel
            title="Personalized Daily Tasks"
            description="Tasks curated based on your academic strengths and areas for improvement"
        >
            <ul class="space-y-4">
                {tasks
                    .into_iter()
                    .map(|task| view! {
                        <li class="p-4 border border-border rounded-lg space-y-2">
                            <div class="flex items-center justify-between">
                                <div class="flex items-center gap-2">
                                    <Badge class="border border-border text-fg">{task.subject}</Badge>
                                    <Badge class=difficulty_class(task.difficulty)>{task.difficulty.as_str()}</Badge>
                                </div>
                                <Badge class="bg-surface-muted text-fg">{format!("+{} pts", task.points)}</Badge>
                            </div>
                            <p class="text-sm font-medium text-fg">{task.task}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Panel>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::fixtures;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_points_and_difficulty() {
        let html = render_to_string(|| view! { <DailyTasks tasks=fixtures::daily_tasks() /> });
        assert!(html.contains("+20 pts"));
        assert!(html.contains("Hard"));
        assert!(html.contains("quadratic equations"));
    }
}
