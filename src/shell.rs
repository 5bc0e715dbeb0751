//! Line-oriented interactive session.

use std::io::{BufRead, Write};
use std::path::Path;

use fridgechef_recipe::Catalog;
use fridgechef_shared::ingredient::split_entries;
use fridgechef_shared::{Allergen, Language, Mood};
use rust_i18n::t;

use crate::commands;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::music::MusicLinks;
use crate::recommendation::Recommendation;
use crate::report::{self, OutputFormat};
use crate::session::Session;
use crate::share::ShareLink;

/// Holds one [`Session`] and applies shell commands to it.
pub struct Shell<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
    format: OutputFormat,
    session: Session,
}

impl<'a> Shell<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a Config, session: Session, format: OutputFormat) -> Self {
        Self {
            catalog,
            config,
            format,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands until `quit` or end of input. Command errors are
    /// printed and the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> AppResult<()> {
        writeln!(output, "{}", t!("shell.welcome", locale = self.locale()))?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            match self.execute(&line?) {
                Ok(Some(reply)) if reply.is_empty() => {}
                Ok(Some(reply)) => writeln!(output, "{reply}")?,
                Ok(None) => break,
                Err(err) => {
                    tracing::debug!(error = %err, "shell command failed");
                    writeln!(output, "error: {err}")?;
                }
            }
        }

        writeln!(output)?;
        Ok(())
    }

    /// Applies one command line. `None` ends the session.
    pub fn execute(&mut self, line: &str) -> AppResult<Option<String>> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));

        let reply = match command {
            "" => String::new(),
            "quit" | "exit" => return Ok(None),
            "help" => t!("shell.help", locale = self.locale()).trim_end().to_string(),
            "have" => {
                self.session.set_have(rest);
                self.ok()
            }
            "select" => {
                self.session.selection = if rest.is_empty() {
                    None
                } else {
                    Some(split_entries(rest))
                };
                self.ok()
            }
            "allergy" => self.allergy(rest)?,
            "lang" => {
                self.session.language = parse_arg::<Language>(rest, "lang ko|en")?;
                self.ok()
            }
            "limit" => {
                let requested = parse_arg::<usize>(rest, "limit <count>")?;
                let limit = self.config.recommend.clamp_limit(Some(requested));
                self.session.limit = Some(limit);
                limit.to_string()
            }
            "recommend" | "plan" => {
                let result = Recommendation::compute(
                    self.catalog,
                    &self.session,
                    &self.config.meal_plan.planner(),
                    self.config.recommend.clamp_limit(self.session.limit),
                    commands::today(),
                );
                if command == "plan" {
                    self.format
                        .render(&result, || report::render_plan(&result, &self.session))?
                } else {
                    self.format.render(&result, || {
                        report::render_recommendation(&result, &self.session)
                    })?
                }
            }
            "fav" => {
                let id = parse_arg::<u32>(rest, "fav <id>")?;
                let recipe = self.catalog.require(id)?;
                let name = recipe.name(self.session.language);
                if self.session.toggle_favorite(id) {
                    t!("favorites.added", locale = self.locale(), name = name).to_string()
                } else {
                    t!("favorites.removed", locale = self.locale(), name = name).to_string()
                }
            }
            "favs" => {
                let favorites = self.session.favorites(self.catalog);
                self.format.render(&favorites, || {
                    report::render_favorites(&favorites, self.session.language)
                })?
            }
            "card" => self.card(rest)?,
            "nutrition" => {
                let items: Vec<&str> = rest
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect();
                if items.is_empty() {
                    return Err(usage("nutrition <ingredient>:<grams>, ..."));
                }
                let totals = commands::nutrition(&items)?;
                self.format
                    .render(&totals, || report::render_nutrition(&totals, self.session.language))?
            }
            "mood" => {
                self.session.mood = parse_arg::<Mood>(rest, "mood chill|energy|focus|retro|k-pop|lofi")?;
                self.ok()
            }
            "music" => {
                let links = MusicLinks::for_mood(self.session.mood);
                self.format
                    .render(&links, || report::render_music(&links, self.session.language))?
            }
            "share" => {
                let share = ShareLink::from(self.session.share_query());
                self.format
                    .render(&share, || report::render_share(&share.link, self.session.language))?
            }
            "reset" => {
                self.session.reset();
                self.ok()
            }
            other => t!("shell.unknown", locale = self.locale(), command = other).to_string(),
        };

        Ok(Some(reply))
    }

    fn allergy(&mut self, rest: &str) -> AppResult<String> {
        const USAGE: &str = "allergy <gluten|dairy|nuts|shellfish|egg|soy> [on|off]";

        let mut args = rest.split_whitespace();
        let allergen = parse_arg::<Allergen>(args.next().unwrap_or_default(), USAGE)?;
        let on = match args.next() {
            Some("on") => true,
            Some("off") => false,
            None => !self.session.allergies.is_enabled(allergen),
            Some(_) => return Err(usage(USAGE)),
        };
        self.session.set_allergy(allergen, on);

        let enabled: Vec<String> = self
            .session
            .allergies
            .enabled()
            .map(|a| a.label().to_string())
            .collect();
        Ok(if enabled.is_empty() {
            t!("report.none", locale = self.locale()).to_string()
        } else {
            enabled.join(", ")
        })
    }

    fn card(&self, rest: &str) -> AppResult<String> {
        const USAGE: &str = "card <id> [file]";

        let (id, out) = match rest.split_once(char::is_whitespace) {
            Some((id, out)) => (id, Some(out.trim())),
            None => (rest, None),
        };
        let id = parse_arg::<u32>(id, USAGE)?;

        match out {
            Some(out) if !out.is_empty() => {
                let path = commands::save_card(self.catalog, id, self.session.language, Path::new(out))?;
                Ok(t!("card.saved", locale = self.locale(), path = path.display()).to_string())
            }
            _ => commands::card(self.catalog, id, self.session.language),
        }
    }

    fn locale(&self) -> &'static str {
        self.session.language.code()
    }

    fn ok(&self) -> String {
        t!("shell.ok", locale = self.locale()).to_string()
    }
}

fn usage(usage: &str) -> AppError {
    AppError::Input(format!("usage: {usage}"))
}

fn parse_arg<T: std::str::FromStr>(arg: &str, usage_text: &str) -> AppResult<T> {
    arg.trim().parse().map_err(|_| usage(usage_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridgechef_recipe::generator;

    fn config() -> Config {
        use crate::config::*;
        Config {
            catalog: CatalogConfig {
                path: "unused.csv".to_string(),
            },
            recommend: RecommendConfig::default(),
            meal_plan: MealPlanConfig::default(),
            observability: ObservabilityConfig::default(),
            session: SessionConfig::default(),
        }
    }

    #[test]
    fn test_commands_update_session() {
        let catalog = generator::generate(30, 6);
        let config = config();
        let mut shell = Shell::new(&catalog, &config, Session::new(Language::Ko), OutputFormat::Text);

        shell.execute("have 두부, 대파(expires today)").unwrap();
        shell.execute("allergy dairy").unwrap();
        shell.execute("lang en").unwrap();
        shell.execute("mood retro").unwrap();
        let limit = shell.execute("limit 99").unwrap();

        assert_eq!(limit.as_deref(), Some("50"));
        let session = shell.session();
        assert_eq!(session.have, "두부, 대파(expires today)");
        assert!(session.allergies.dairy);
        assert_eq!(session.language, Language::En);
        assert_eq!(session.mood, Mood::Retro);
        assert_eq!(session.limit, Some(50));
    }

    #[test]
    fn test_allergy_toggles_without_state_argument() {
        let catalog = generator::generate(5, 6);
        let config = config();
        let mut shell = Shell::new(&catalog, &config, Session::new(Language::En), OutputFormat::Text);

        assert_eq!(shell.execute("allergy egg").unwrap().as_deref(), Some("Egg(난류)"));
        assert_eq!(shell.execute("allergy egg").unwrap().as_deref(), Some("None"));
        assert!(shell.execute("allergy pollen").is_err());
        assert!(shell.execute("allergy egg maybe").is_err());
    }

    #[test]
    fn test_favorites_and_unknown_ids() {
        let catalog = generator::generate(10, 6);
        let config = config();
        let mut shell = Shell::new(&catalog, &config, Session::new(Language::Ko), OutputFormat::Text);

        shell.execute("fav 4").unwrap();
        shell.execute("fav 2").unwrap();
        assert!(shell.execute("fav 77").is_err());

        let favs = shell.execute("favs").unwrap().unwrap();
        let four = favs.find("#4").unwrap();
        let two = favs.find("#2").unwrap();
        assert!(two < four, "favorites follow catalog order");
    }

    #[test]
    fn test_run_stops_at_quit_and_survives_errors() {
        let catalog = generator::generate(10, 6);
        let config = config();
        let mut shell = Shell::new(&catalog, &config, Session::new(Language::En), OutputFormat::Text);

        let input = "card 999\nnutrition 두부:100, 계란:50\nquit\nhave 감자\n";
        let mut output = Vec::new();
        shell.run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("FridgeChef shell."));
        assert!(text.contains("error: "));
        assert!(text.contains("Energy: 153.5 kcal"));
        assert!(shell.session().have.is_empty(), "input after quit is not read");
    }

    #[test]
    fn test_nutrition_items_may_contain_spaces() {
        let catalog = generator::generate(1, 6);
        let config = config();
        let mut shell = Shell::new(&catalog, &config, Session::new(Language::En), OutputFormat::Text);

        let reply = shell.execute("nutrition green onion:100, 두부:100").unwrap().unwrap();
        assert!(reply.contains("Energy: 107 kcal"), "{reply}");
        assert!(shell.execute("nutrition ,").is_err());
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let catalog = generator::generate(1, 6);
        let config = config();
        let mut shell = Shell::new(&catalog, &config, Session::new(Language::En), OutputFormat::Text);

        assert_eq!(
            shell.execute("dance").unwrap().as_deref(),
            Some("Unknown command: dance")
        );
        assert_eq!(shell.execute("quit").unwrap(), None);
    }
}
