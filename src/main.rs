use std::env;
use std::process;

use mealdeck::{MealDeck, Recipe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("help");

    let deck = MealDeck::from_env()?;

    match command {
        "categories" => {
            let categories = deck.meals().categories().await?;
            for category in mealdeck::categories_from_raw(&categories) {
                println!("{:>3}. {}", category.id, category.title);
            }
        }
        "random" => {
            let raw = deck.meals().random_meal().await?;
            match raw.as_ref().and_then(mealdeck::normalize) {
                Some(recipe) => print_recipe(&recipe),
                None => println!("The service returned nothing usable, try again."),
            }
        }
        "category" => {
            let name = args
                .get(2)
                .ok_or("Usage: mealdeck category <name>")?;
            let recipes = deck.home_loader().load_by_category(name).await;
            if recipes.is_empty() {
                println!("No recipes found");
            }
            for recipe in &recipes {
                println!("{:>6}  {}", recipe.id, recipe.title);
            }
        }
        "recipe" => {
            let id = args.get(2).ok_or("Usage: mealdeck recipe <id>")?;
            match mealdeck::lookup_recipe(id).await? {
                Some(recipe) => print_recipe(&recipe),
                None => {
                    eprintln!("No recipe with id {}", id);
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Usage: mealdeck <categories|random|category <name>|recipe <id>>");
            process::exit(2);
        }
    }

    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{} ({})", recipe.title, recipe.id);
    if !recipe.area.is_empty() {
        println!("{} Cuisine - {}", recipe.area, recipe.category);
    }
    println!("{} | serves {}", recipe.cook_time, recipe.servings);
    println!();
    println!("{}", recipe.description);
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!();
    println!("Instructions:");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    if let Some(url) = recipe.youtube_embed_url() {
        println!();
        println!("Video: {}", url);
    }
}
