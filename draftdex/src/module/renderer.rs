//! Comparison table renderer
//!
//! Draws the sorted list as a `psql`-style text table. Colour is optional:
//! my team in red, the opponent's in blue, real stat values in bold.

use draftdex_common::{Side, StatKind};
use owo_colors::{OwoColorize, Style};

use crate::error::LookupError;
use super::roster::{needs_form_suffix, suggest_names, Lookup, Pokemon};

pub const POKEAPI_LINK: &str = "https://pokeapi.co/";
const NAME_HEADER: &str = "Pokémon";
const SCARF_HEADER: &str = "Scarfed Speed";

/// One table cell: the visible text (for widths) and what gets printed
#[derive(Debug, Clone)]
struct Cell {
    plain: String,
    styled: String,
}

impl Cell {
    fn plain(text: &str) -> Self {
        Self {
            plain: text.to_string(),
            styled: text.to_string(),
        }
    }

    fn width(&self) -> usize {
        self.plain.chars().count()
    }
}

pub struct TableRenderer {
    color: bool,
}

impl TableRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn side_style(side: Side) -> Style {
        match side {
            Side::Mine => Style::new().red(),
            Side::Opponent => Style::new().blue(),
        }
    }

    fn error_style() -> Style {
        Style::new().red().bold()
    }

    /// Header labels, in column order
    pub fn headers() -> Vec<&'static str> {
        let mut headers = vec![NAME_HEADER];
        headers.extend(StatKind::ALL.iter().map(|kind| kind.label()));
        headers.push(SCARF_HEADER);
        headers
    }

    fn row_cells(&self, pokemon: &Pokemon) -> Vec<Cell> {
        let side = Self::side_style(pokemon.side);
        let strong = side.bold();

        let mut cells = vec![Cell {
            plain: pokemon.pretty_name.clone(),
            styled: self.paint(&pokemon.pretty_name, side),
        }];

        for kind in StatKind::ALL {
            let real = pokemon.stats.get(kind).to_string();
            let base = format!(" / {}", pokemon.base.get(kind));
            cells.push(Cell {
                plain: format!("{}{}", real, base),
                styled: format!("{}{}", self.paint(&real, strong), self.paint(&base, side)),
            });
        }

        let scarf = pokemon.stats.scarfed_speed.to_string();
        cells.push(Cell {
            styled: self.paint(&scarf, strong),
            plain: scarf,
        });
        cells
    }

    /// The bare table, no note and no trailing newline
    pub fn render_table(&self, pokemon: &[Pokemon]) -> String {
        let header: Vec<Cell> = Self::headers().into_iter().map(Cell::plain).collect();
        let rows: Vec<Vec<Cell>> = pokemon.iter().map(|p| self.row_cells(p)).collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                rows.iter()
                    .map(|row| row[col].width())
                    .chain(std::iter::once(header[col].width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |edge: &str, joint: &str| -> String {
            let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
            format!("{}{}{}", edge, segments.join(joint), edge)
        };
        let line = |cells: &[Cell]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!(" {}{} ", cell.styled, " ".repeat(w - cell.width())))
                .collect();
            format!("|{}|", padded.join("|"))
        };

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(rule("+", "+"));
        lines.push(line(header.as_slice()));
        lines.push(rule("|", "+"));
        for row in &rows {
            lines.push(line(row.as_slice()));
        }
        lines.push(rule("+", "+"));
        lines.join("\n")
    }

    pub fn render_note(&self) -> String {
        self.paint(
            "NOTE: It is impossible for a Pokémon to have all of these stats at once due to how natures and EVs work.",
            Self::error_style(),
        )
    }

    pub fn render_no_valid(&self) -> String {
        self.paint(
            "ERROR: No valid Pokémon were provided. Please try again.",
            Self::error_style(),
        )
    }

    /// Note plus table, or the "nothing valid" error for an empty list
    pub fn render_report(&self, sorted: &[Pokemon]) -> String {
        if sorted.is_empty() {
            return self.render_no_valid();
        }
        format!("{}\n{}", self.render_note(), self.render_table(sorted))
    }

    /// Message for a name that produced no Pokémon, or None for a found one
    pub fn render_invalid(&self, lookup: &Lookup) -> Option<String> {
        let Lookup::Invalid { name, error, .. } = lookup else {
            return None;
        };

        let message = match error {
            LookupError::EmptyName => "No Pokémon were entered. Continuing.".to_string(),
            LookupError::NotFound { .. } => {
                let mut message = format!(
                    "ERROR: '{}' was not found when consulting PokeAPI ({}). Check for a typo, or if the Pokémon has alternate forms. (E.g. 'landorus' should either be 'landorus-incarnate' or 'landorus-therian'.)",
                    name, POKEAPI_LINK
                );
                if needs_form_suffix(name) {
                    message.push_str(&format!(" '{}' needs a form, e.g. '{}-<form>'.", name, name));
                }
                let suggestions = suggest_names(name);
                if !suggestions.is_empty() {
                    message.push_str(&format!(" Did you mean: {}?", suggestions.join(", ")));
                }
                message
            }
            other => format!("ERROR: could not look up '{}': {}", name, other),
        };

        Some(self.paint(&message, Self::error_style()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::pokeapi::PokemonRecord;
    use draftdex_common::BaseStats;

    fn garchomp(side: Side) -> Pokemon {
        Pokemon::from_record(
            PokemonRecord {
                name: "garchomp".to_string(),
                base: BaseStats {
                    hp: 108,
                    attack: 130,
                    defense: 95,
                    sp_attack: 80,
                    sp_defense: 85,
                    speed: 102,
                },
            },
            side,
        )
    }

    #[test]
    fn test_plain_table_layout() {
        let table = TableRenderer::new(false).render_table(&[garchomp(Side::Mine)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "| Pokémon  | HP        | Attack    | Defense  | Sp. Attack | Sp. Defense | Speed     | Scarfed Speed |"
        );
        assert_eq!(
            lines[3],
            "| Garchomp | 420 / 108 | 394 / 130 | 317 / 95 | 284 / 80   | 295 / 85    | 333 / 102 | 499           |"
        );
        assert!(lines[0].starts_with("+----------+"));
        assert!(lines[2].starts_with("|----------+"));
        assert_eq!(lines[0], lines[4]);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_color_does_not_change_layout() {
        let colored = TableRenderer::new(true).render_table(&[garchomp(Side::Opponent)]);
        assert!(colored.contains("\u{1b}["));
        let plain = TableRenderer::new(false).render_table(&[garchomp(Side::Opponent)]);
        assert_eq!(colored.lines().next(), plain.lines().next());
    }

    #[test]
    fn test_empty_report() {
        let out = TableRenderer::new(false).render_report(&[]);
        assert_eq!(out, "ERROR: No valid Pokémon were provided. Please try again.");
    }

    #[test]
    fn test_report_has_note() {
        let out = TableRenderer::new(false).render_report(&[garchomp(Side::Mine)]);
        assert!(out.starts_with("NOTE: It is impossible"));
        assert!(out.contains("| Garchomp |"));
    }

    #[test]
    fn test_invalid_messages() {
        let renderer = TableRenderer::new(false);
        let empty = Lookup::Invalid {
            name: String::new(),
            side: Side::Mine,
            error: LookupError::EmptyName,
        };
        assert_eq!(
            renderer.render_invalid(&empty).unwrap(),
            "No Pokémon were entered. Continuing."
        );

        let landorus = Lookup::Invalid {
            name: "landorus".to_string(),
            side: Side::Opponent,
            error: LookupError::NotFound {
                name: "landorus".to_string(),
                status: 404,
            },
        };
        let message = renderer.render_invalid(&landorus).unwrap();
        assert!(message.starts_with("ERROR: 'landorus' was not found when consulting PokeAPI (https://pokeapi.co/)"));
        assert!(message.contains("'landorus-<form>'"));
        assert!(!message.contains("Did you mean"));

        let not_found = |name: &str| Lookup::Invalid {
            name: name.to_string(),
            side: Side::Mine,
            error: LookupError::NotFound {
                name: name.to_string(),
                status: 404,
            },
        };
        let message = renderer.render_invalid(&not_found("farfetched")).unwrap();
        assert!(message.ends_with("'landorus-therian'.) Did you mean: farfetchd?"));
        let message = renderer.render_invalid(&not_found("mr-mine")).unwrap();
        assert!(message.ends_with(" Did you mean: mr-mime, mr-rime?"));

        let found = Lookup::Found(garchomp(Side::Mine));
        assert!(renderer.render_invalid(&found).is_none());
    }
}
