//! Text and JSON rendering of command output.

use serde_json::json;

use crate::app::Output;

/// Render `output` as plain text, or as pretty JSON when `json` is set.
pub fn render(output: &Output, json: bool) -> serde_json::Result<String> {
    if json { render_json(output) } else { Ok(render_text(output)) }
}

fn render_json(output: &Output) -> serde_json::Result<String> {
    let value = match output {
        Output::Migrated => json!({ "migrated": true }),
        Output::Registered(id) => json!({ "id": id }),
        Output::Count(count) => json!({ "count": count }),
        Output::Reported { winner, loser } => json!({ "winner_id": winner, "loser_id": loser }),
        Output::Standings(standings) => serde_json::to_value(standings)?,
        Output::Pairings(pairings) => serde_json::to_value(pairings)?,
        Output::Cleared { removed, .. } => json!({ "removed": removed }),
        Output::Posted(id) => json!({ "id": id }),
        Output::Posts(posts) => serde_json::to_value(posts)?,
    };
    serde_json::to_string_pretty(&value)
}

fn render_text(output: &Output) -> String {
    match output {
        Output::Migrated => "Schema is up to date".to_string(),
        Output::Registered(id) => format!("Registered player {id}"),
        Output::Count(count) => count.to_string(),
        Output::Reported { winner, loser } => format!("Recorded: {winner} beat {loser}"),
        Output::Standings(standings) => {
            let mut lines = vec![format!(
                "{:>4}  {:<24} {:>4} {:>7}",
                "ID", "NAME", "WINS", "MATCHES"
            )];
            lines.extend(standings.iter().map(|s| {
                format!("{:>4}  {:<24} {:>4} {:>7}", s.id, s.name, s.wins, s.matches)
            }));
            lines.join("\n")
        }
        Output::Pairings(pairings) if pairings.is_empty() => "No players to pair".to_string(),
        Output::Pairings(pairings) => pairings
            .iter()
            .map(|p| format!("{:>4} {:<24} vs {:>4} {}", p.id1, p.name1, p.id2, p.name2))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Cleared { what, removed } => format!("Deleted {removed} {what}"),
        Output::Posted(id) => format!("Stored post {id}"),
        Output::Posts(posts) if posts.is_empty() => "No posts".to_string(),
        Output::Posts(posts) => posts
            .iter()
            .map(|p| format!("[{}] {}", p.time.format("%Y-%m-%d %H:%M:%S"), p.content))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiss_forum::{Pairing, PlayerStanding};

    #[test]
    fn test_render_standings_text() {
        let output = Output::Standings(vec![PlayerStanding {
            id: 1,
            name: "Ada".to_string(),
            wins: 2,
            matches: 3,
        }]);

        let text = render(&output, false).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("WINS"));
        assert!(lines[1].contains("Ada"));
        assert!(lines[1].trim_end().ends_with('3'));
    }

    #[test]
    fn test_render_pairings_json() {
        let first = PlayerStanding::new(1, "Ada");
        let second = PlayerStanding::new(2, "Grace");
        let output = Output::Pairings(vec![Pairing::new(&first, &second)]);

        let text = render(&output, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["id1"], 1);
        assert_eq!(value[0]["name2"], "Grace");
    }

    #[test]
    fn test_render_empty_lists() {
        assert_eq!(render(&Output::Pairings(vec![]), false).unwrap(), "No players to pair");
        assert_eq!(render(&Output::Posts(vec![]), false).unwrap(), "No posts");
        assert_eq!(render(&Output::Posts(vec![]), true).unwrap(), "[]");
    }

    #[test]
    fn test_render_cleared() {
        let output = Output::Cleared {
            what: "match(es)",
            removed: 4,
        };
        assert_eq!(render(&output, false).unwrap(), "Deleted 4 match(es)");
        assert!(render(&output, true).unwrap().contains("\"removed\": 4"));
    }
}
