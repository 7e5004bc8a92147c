//! Recent Log Component
//!
//! Collapsible view of the logger's history buffer, newest line first.

use leptos::prelude::*;

/// Lines shown at most
const SHOWN_LINES: usize = 50;

/// Newest `limit` lines, newest first
pub fn newest_first(lines: Vec<String>, limit: usize) -> Vec<String> {
    lines.into_iter().rev().take(limit).collect()
}

#[component]
pub fn RecentLog() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(newest_first(console_logger::recent(), SHOWN_LINES));

    let toggle = move |_| {
        let opening = !open.get_untracked();
        if opening {
            refresh();
        }
        set_open.set(opening);
    };

    view! {
        <div class="recent-log">
            <button class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide recent log" } else { "Show recent log" }}
            </button>
            <Show when=move || open.get()>
                <button class="log-refresh" on:click=move |_| refresh()>"Refresh"</button>
                <pre class="log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log lines yet".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_limits_lines() {
        let lines: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(newest_first(lines.clone(), 2), vec!["c", "b"]);
        assert_eq!(newest_first(lines, 10), vec!["c", "b", "a"]);
        assert!(newest_first(Vec::new(), 5).is_empty());
    }
}
