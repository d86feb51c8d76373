//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every gateway call runs off the main loop; results come back as
//! messages on the same channel the input thread feeds.

use tokio::sync::mpsc;
use tracing::{error, warn};

use geodish_api::{ApiError, GeoDishClient};

use crate::config::{save_settings, Settings};
use crate::handler::UpdateAction;
use crate::message::Message;

/// Everything the action dispatcher needs to spawn gateway tasks.
#[derive(Clone)]
pub struct ActionContext {
    pub client: GeoDishClient,
    pub user_id: String,
    pub msg_tx: mpsc::UnboundedSender<Message>,
}

impl ActionContext {
    fn send(&self, message: Message) {
        if self.msg_tx.send(message).is_err() {
            warn!("message channel closed, dropping gateway result");
        }
    }
}

/// Execute an action by spawning a background task.
///
/// `settings` is only read for actions that persist configuration.
pub fn handle_action(ctx: &ActionContext, action: UpdateAction, settings: &Settings) {
    match action {
        UpdateAction::LoadCountries => {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                match ctx.client.list_countries().await {
                    Ok(countries) => ctx.send(Message::CountriesLoaded(countries)),
                    Err(e) => ctx.send(Message::CountriesLoadFailed(e.to_string())),
                }
            });
        }

        UpdateAction::LoadRandomDish { country } => {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                match ctx.client.random_dish(&country).await {
                    Ok(dish) => ctx.send(Message::DishLoaded { country, dish }),
                    Err(e) => ctx.send(Message::DishLoadFailed {
                        country,
                        error: e.to_string(),
                    }),
                }
            });
        }

        UpdateAction::SaveRecipe {
            dish_id,
            dish_name,
            custom_name,
        } => {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                let result = ctx
                    .client
                    .save_recipe(&ctx.user_id, &dish_id, custom_name.as_deref())
                    .await;
                match result {
                    Ok(()) => ctx.send(Message::RecipeSaved { dish_name }),
                    Err(e) => ctx.send(Message::RecipeSaveFailed {
                        conflict: matches!(e, ApiError::AlreadySaved(_)),
                        message: e.to_string(),
                    }),
                }
            });
        }

        UpdateAction::LoadRecipes => {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                match ctx.client.list_recipes(&ctx.user_id).await {
                    Ok(recipes) => ctx.send(Message::RecipesLoaded(recipes)),
                    Err(e) => ctx.send(Message::RecipesLoadFailed(e.to_string())),
                }
            });
        }

        UpdateAction::DeleteRecipe { recipe_id } => {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                match ctx.client.delete_recipe(&ctx.user_id, &recipe_id).await {
                    Ok(()) => ctx.send(Message::RecipeDeleted { recipe_id }),
                    Err(e) => ctx.send(Message::RecipeDeleteFailed {
                        recipe_id,
                        message: e.to_string(),
                    }),
                }
            });
        }

        UpdateAction::ProbeDishImage { dish_id, dish_name } => {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                let url = ctx.client.probe_dish_image(&dish_name).await;
                ctx.send(Message::DishImageResolved { dish_id, url });
            });
        }

        UpdateAction::PersistTheme(_theme) => {
            // Settings already carry the new theme when this action fires
            if let Err(e) = save_settings(settings) {
                error!(error = %e, "failed to persist theme preference");
            }
        }
    }
}
