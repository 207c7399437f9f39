//! Query Dispatcher - commands and mentions in, answers out.
//!
//! Direct commands go straight to one catalog; free questions are classified
//! first and tried against each catalog in the classifier's order. Each
//! query runs as its own task, and whatever goes wrong inside it comes back
//! as the generic retry answer.

mod command;
mod cooldown;
mod messages;

pub use command::*;
pub use cooldown::CooldownGate;
pub use messages::*;

use game_data::{ChampionDetail, Entity, EntityType};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, Instrument};

use crate::cache::{Clock, FileCache, SystemClock};
use crate::config::LookupConfig;
use crate::data_access::DataDragon;
use crate::error::Result;
use crate::formatter::AnswerFormatter;
use crate::gateway::HttpGateway;
use crate::intent::{classify, QueryId};
use crate::resolver::{resolve, resolve_region, resolve_rune};

/// The reply to one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub text: String,
    /// Type of the entity the answer was built from, if any.
    pub source: Option<EntityType>,
    /// Whether an entity was resolved.
    pub found: bool,
}

impl Answer {
    /// A fixed message not backed by any entity.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
            found: false,
        }
    }
}

/// The lookup assistant: data access, formatting and the mention cooldown.
pub struct Assistant {
    data: DataDragon,
    formatter: AnswerFormatter,
    cooldown: CooldownGate,
}

impl Assistant {
    pub fn new(data: DataDragon) -> Self {
        let formatter = AnswerFormatter::new(data.config().max_answer_len);
        let cooldown = CooldownGate::new(data.config().mention_cooldown());
        Self {
            data,
            formatter,
            cooldown,
        }
    }

    /// Wire the file cache, the HTTP gateway and the system clock.
    pub fn from_config(config: LookupConfig) -> Result<Self> {
        config.validate()?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache = Arc::new(FileCache::new(config.cache_dir.clone(), clock.clone()));
        let gateway = Arc::new(HttpGateway::new(config.request_timeout())?);
        Ok(Self::new(DataDragon::new(Arc::new(config), cache, gateway, clock)))
    }

    /// Answer `command` in its own task.
    pub async fn respond(self: &Arc<Self>, command: Command) -> Answer {
        let this = Arc::clone(self);
        let label = command.label();
        match tokio::spawn(async move { this.answer(command).await }).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(command = label, error = %e, "query task failed");
                self.message(GENERIC_ERROR)
            }
        }
    }

    /// Answer free text addressed to the assistant by `user`.
    ///
    /// The mention marker is removed if still present. Empty text gets the
    /// help text. `None` when the user is still inside the cooldown window;
    /// the query is dropped without a reply.
    pub async fn mention(self: &Arc<Self>, user: &str, text: &str) -> Option<Answer> {
        let text = strip_mention(text, MENTION_MARKER).unwrap_or_else(|| text.trim().to_string());
        if text.is_empty() {
            return Some(self.help());
        }
        if !self.cooldown.admit(user) {
            debug!(user, "mention inside cooldown window, dropped");
            return None;
        }
        Some(self.respond(Command::Ask(text)).await)
    }

    /// Answer `command` on the current task.
    pub async fn answer(&self, command: Command) -> Answer {
        match command {
            Command::Ask(question) => self.ask(&question).await,
            Command::Champion(name) => self.champion(&name).await,
            Command::Item(name) => self.item(&name).await,
            Command::Region(name) => self.region(&name),
            Command::Help => self.help(),
        }
    }

    /// Classify a free question and try each candidate catalog in order.
    pub async fn ask(&self, question: &str) -> Answer {
        let query = classify(question);
        let span = info_span!("query", query_id = %query.id);

        async move {
            if query.is_help() {
                return self.help();
            }
            debug!(
                search = %query.search_text,
                candidates = ?query.candidate_types,
                "classified"
            );

            for entity_type in query.attempt_order() {
                // regions match against the whole query
                let text = match entity_type {
                    EntityType::Region => &query.normalized_text,
                    _ => &query.search_text,
                };
                if let Some(entity) = self.lookup(entity_type, text).await {
                    return self.render(&entity);
                }
                debug!(%entity_type, "no match");
            }

            info!("nothing matched, asking for clarification");
            self.message(CLARIFICATION)
        }
        .instrument(span)
        .await
    }

    pub async fn champion(&self, name: &str) -> Answer {
        self.direct(EntityType::Champion, name, CHAMPION_NOT_FOUND).await
    }

    pub async fn item(&self, name: &str) -> Answer {
        self.direct(EntityType::Item, name, ITEM_NOT_FOUND).await
    }

    pub fn region(&self, name: &str) -> Answer {
        match resolve_region(name) {
            Some(region) => self.render(&Entity::Region(*region)),
            None => self.message(REGION_NOT_FOUND),
        }
    }

    pub fn help(&self) -> Answer {
        self.message(HELP)
    }

    async fn direct(&self, entity_type: EntityType, name: &str, not_found: &str) -> Answer {
        let span = info_span!("query", query_id = %QueryId::new(), %entity_type);
        async move {
            match self.lookup(entity_type, name).await {
                Some(entity) => self.render(&entity),
                None => {
                    info!(query = name, "not found");
                    self.message(not_found)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Resolve `text` in the catalog of `entity_type`.
    async fn lookup(&self, entity_type: EntityType, text: &str) -> Option<Entity> {
        match entity_type {
            EntityType::Region => resolve_region(text).map(|r| Entity::Region(*r)),
            EntityType::Champion => self.find_champion(text).await.map(Entity::Champion),
            EntityType::Item => {
                let table = self.data.item_table().await?;
                let item = resolve(table.items(), text)?.clone();
                Some(Entity::Item(item))
            }
            EntityType::Rune => {
                let trees = self.data.rune_trees().await?;
                let found = resolve_rune(trees.trees(), text)?;
                Some(found.to_entity())
            }
            EntityType::SummonerSpell => {
                let spells = self.data.spell_table().await?;
                let spell = resolve(spells.spells(), text)?.clone();
                Some(Entity::SummonerSpell(spell))
            }
        }
    }

    /// Resolve against the index, then fetch the full record.
    async fn find_champion(&self, text: &str) -> Option<ChampionDetail> {
        let index = self.data.champion_index().await?;
        let id = resolve(index.champions(), text)?.id.clone();
        self.data.champion_detail(&id).await
    }

    /// A fixed message, clipped like every other answer.
    fn message(&self, text: &str) -> Answer {
        Answer::message(self.formatter.message(text))
    }

    fn render(&self, entity: &Entity) -> Answer {
        info!(
            entity_type = %entity.entity_type(),
            id = %entity.id(),
            "answered"
        );
        Answer {
            text: self.formatter.format(entity),
            source: Some(entity.entity_type()),
            found: true,
        }
    }
}
