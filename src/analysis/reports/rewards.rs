//! Rewards report formatter

use super::utils::{card_line, export_json, render_table};
use super::OutputFormat;
use crate::analysis::rewards::{aggregate_tokens, RewardsView};
use crate::analysis::table::{SortDirection, SortableTable};
use crate::errors::AppResult;
use crate::types::rewards::RewardSortKey;
use crate::utils::number::{format_dollar_value, format_number};

const CARD_LABEL_WIDTH: usize = 28;

/// Format a rewards view
///
/// Console output lists the totals cards followed by the category table;
/// `show_tokens` adds each row's per-token breakdown under it. JSON and
/// Plotly both export the view.
pub fn format_rewards(
    view: &RewardsView,
    show_tokens: bool,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str("=== LAVA REWARDS ===\n\n");

            for total in &view.totals {
                output.push_str(&card_line(&total.title, &total.value, CARD_LABEL_WIDTH));
            }
            if let Some(past) = view.total_past_rewards_usd {
                output.push_str(&card_line(
                    "past rewards (aggregator)",
                    &format_dollar_value(past),
                    CARD_LABEL_WIDTH,
                ));
            }

            let arrow = |key: RewardSortKey| {
                if view.sort_key != key {
                    ""
                } else {
                    match view.direction {
                        SortDirection::Asc => " ↑",
                        SortDirection::Desc => " ↓",
                    }
                }
            };

            output.push_str(&format!(
                "\n{} ({} entries)\n\n",
                view.category.display_name(),
                view.entries.len()
            ));
            if view.entries.is_empty() {
                output.push_str("No rewards recorded.\n");
                return Ok(output);
            }

            if show_tokens {
                for entry in &view.entries {
                    output.push_str(&format!(
                        "{}  {}\n",
                        entry.address,
                        format_dollar_value(entry.rewards.clone())
                    ));
                    for token in aggregate_tokens(&entry.tokens) {
                        output.push_str(&format!(
                            "    {} {}  {}\n",
                            format_number(token.amount.as_str()),
                            token.denom,
                            format_dollar_value(token.value_usd.as_str())
                        ));
                    }
                }
            } else {
                let table = SortableTable::new(
                    vec![
                        format!("Address{}", arrow(RewardSortKey::Address)),
                        format!("Rewards{}", arrow(RewardSortKey::Rewards)),
                    ],
                    view.entries
                        .iter()
                        .map(|e| vec![e.address.clone(), format_dollar_value(e.rewards.clone())])
                        .collect(),
                );
                output.push_str(&render_table(&table));
            }
            Ok(output)
        }
        OutputFormat::Json | OutputFormat::Plotly => export_json(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rewards::{ProcessedToken, RewardCategory, RewardEntry, RewardsData};
    use crate::utils::number::LooseValue;

    fn data() -> RewardsData {
        let token = |amount: &str, denom: &str, usd: &str| ProcessedToken {
            amount: amount.to_string(),
            denom: denom.to_string(),
            original_denom: String::new(),
            value_usd: usd.to_string(),
        };
        let mut data = RewardsData::default();
        data.totals
            .insert("total_rewards".to_string(), LooseValue::from(1234.5));
        data.totals
            .insert("validator_rewards".to_string(), LooseValue::from("$1000"));
        data.validator_rewards = vec![
            RewardEntry {
                address: "lava@valoper1aaa".to_string(),
                rewards: "$200".into(),
                tokens: vec![
                    token("1000", "lava", "$150"),
                    token("5", "atom", "$50"),
                    token("500", "lava", "$0"),
                ],
            },
            RewardEntry {
                address: "lava@valoper1bbb".to_string(),
                rewards: 800.0.into(),
                tokens: Vec::new(),
            },
        ];
        data
    }

    fn view() -> RewardsView {
        RewardsView::build(
            &data(),
            RewardCategory::Validators,
            RewardSortKey::Rewards,
            SortDirection::Desc,
        )
    }

    #[test]
    fn test_console_totals_then_table() {
        let output = format_rewards(&view(), false, &OutputFormat::Console).unwrap();
        let validator_pos = output.find("validator rewards:").unwrap();
        let total_pos = output.find("total rewards:").unwrap();
        assert!(validator_pos < total_pos);
        assert!(output.contains("$1,234.50"));
        assert!(output.contains("Rewards ↓"));

        let bbb = output.find("lava@valoper1bbb").unwrap();
        let aaa = output.find("lava@valoper1aaa").unwrap();
        assert!(bbb < aaa);
    }

    #[test]
    fn test_console_token_breakdown() {
        let output = format_rewards(&view(), true, &OutputFormat::Console).unwrap();
        assert!(output.contains("    1,500 lava  $150.00"));
        assert!(output.contains("    5 atom  $50.00"));
        let lava = output.find("1,500 lava").unwrap();
        let atom = output.find("5 atom").unwrap();
        assert!(lava < atom);
    }

    #[test]
    fn test_past_rewards_card() {
        let output =
            format_rewards(&view().with_past_rewards(413416.7), false, &OutputFormat::Console)
                .unwrap();
        assert!(output.contains("$413,416.70"));
    }

    #[test]
    fn test_empty_category() {
        let view = RewardsView::build(
            &data(),
            RewardCategory::ProviderDelegators,
            RewardSortKey::Address,
            SortDirection::Asc,
        );
        let output = format_rewards(&view, false, &OutputFormat::Console).unwrap();
        assert!(output.contains("Provider Delegators (0 entries)"));
        assert!(output.contains("No rewards recorded."));
    }

    #[test]
    fn test_json_export() {
        let output = format_rewards(&view(), false, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["category"], "validators");
        assert_eq!(value["totals"][1]["title"], "total rewards");
        assert!(value.get("total_past_rewards_usd").is_none());
    }
}
