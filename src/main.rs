use clap::{Parser, Subcommand};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use recipe_box::config::load_config;
use recipe_box::{
    render_page, render_text, AdvancedFilter, AppConfig, Dialogs, FileStore, Message, Outcome,
    RecipeBox, RecipeDraft, RecipeError, View,
};

#[derive(Parser)]
#[command(name = "recipe-box")]
#[command(version, about = "Create, edit, search and delete recipes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage directory (overrides the configured data_dir)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Configuration file (defaults to ./recipe-box.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new recipe
    Add {
        #[arg(short, long, default_value = "")]
        title: String,
        /// One ingredient; repeat for more
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        #[arg(long, default_value = "")]
        instructions: String,
        #[arg(long, default_value = "")]
        cuisine: String,
    },
    /// Edit a recipe; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        /// Replaces the whole ingredient list; repeat for more
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        #[arg(long)]
        instructions: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
    },
    /// Delete a recipe
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List recipes, optionally filtered
    List {
        /// Match title or any ingredient (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact cuisine
        #[arg(long, default_value = "")]
        cuisine: String,
        #[arg(long, default_value = "")]
        adv_title: String,
        #[arg(long, default_value = "")]
        adv_ingredient: String,
        #[arg(long, default_value = "")]
        adv_cuisine: String,
    },
    /// Show a single recipe
    Show { id: String },
    /// List the cuisines in use
    Cuisines,
    /// Write the recipe page as a standalone HTML file
    ExportHtml { path: PathBuf },
}

/// Dialogs answered on the terminal
struct TerminalDialogs {
    assume_yes: bool,
}

impl Dialogs for TerminalDialogs {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(file) => load_config(file)?,
        None => AppConfig::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    debug!("Using storage at {}", config.store_dir()?.display());

    let mut app = RecipeBox::from_config(&config)?;
    let mut dialogs = TerminalDialogs { assume_yes: false };

    match cli.command {
        Commands::Add {
            title,
            ingredients,
            instructions,
            cuisine,
        } => {
            let draft = RecipeDraft {
                title,
                ingredients: ingredients.join("\n"),
                instructions,
                cuisine,
            };
            app.update(Message::EditDraft(draft), &mut dialogs);
            let outcome = app.update(Message::Submit, &mut dialogs);
            let id = expect_saved(&mut app, outcome)?;
            println!("Added recipe {}", id);
        }
        Commands::Edit {
            id,
            title,
            ingredients,
            instructions,
            cuisine,
        } => {
            if app.update(Message::Edit(id.clone()), &mut dialogs) == Outcome::Ignored {
                return Err(RecipeError::NotFound(id).into());
            }
            let mut draft = app.form().draft().clone();
            if let Some(title) = title {
                draft.title = title;
            }
            if !ingredients.is_empty() {
                draft.ingredients = ingredients.join("\n");
            }
            if let Some(instructions) = instructions {
                draft.instructions = instructions;
            }
            if let Some(cuisine) = cuisine {
                draft.cuisine = cuisine;
            }
            app.update(Message::EditDraft(draft), &mut dialogs);
            let outcome = app.update(Message::Submit, &mut dialogs);
            let id = expect_saved(&mut app, outcome)?;
            println!("Updated recipe {}", id);
        }
        Commands::Delete { id, yes } => {
            dialogs.assume_yes = yes;
            match app.update(Message::Delete(id.clone()), &mut dialogs) {
                Outcome::Deleted(id) => {
                    if let Some(e) = app.take_save_error() {
                        return Err(e.into());
                    }
                    println!("Deleted recipe {}", id);
                }
                Outcome::DeleteDeclined => println!("Kept recipe {}", id),
                _ => return Err(RecipeError::NotFound(id).into()),
            }
        }
        Commands::List {
            search,
            cuisine,
            adv_title,
            adv_ingredient,
            adv_cuisine,
        } => {
            app.update(Message::BasicSearch(search), &mut dialogs);
            app.update(Message::FilterCuisine(cuisine), &mut dialogs);
            app.update(
                Message::ApplyAdvanced(AdvancedFilter {
                    title: adv_title,
                    ingredient: adv_ingredient,
                    cuisine: adv_cuisine,
                }),
                &mut dialogs,
            );
            print!("{}", render_text(&app.view()));
        }
        Commands::Show { id } => {
            let recipe = app.find(&id).ok_or(RecipeError::NotFound(id))?;
            print!("{}", render_text(&View::Recipes(vec![recipe])));
        }
        Commands::Cuisines => {
            for cuisine in app.cuisines() {
                println!("{}", cuisine);
            }
        }
        Commands::ExportHtml { path } => {
            std::fs::write(&path, render_page(&app)).map_err(RecipeError::from)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Turn a submit outcome into the saved id or an error for the exit status
fn expect_saved(
    app: &mut RecipeBox<FileStore>,
    outcome: Outcome,
) -> Result<String, RecipeError> {
    if let Some(e) = app.take_save_error() {
        return Err(e);
    }
    match outcome {
        Outcome::Added(id) | Outcome::Updated(id) => Ok(id),
        Outcome::Invalid(e) => Err(RecipeError::Validation(e)),
        _ => Err(RecipeError::NotFound("recipe being edited".to_string())),
    }
}
