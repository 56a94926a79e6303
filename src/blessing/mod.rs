//! Blessing text paired with each shape.
//!
//! Text comes from an external generator behind the [`BlessingSource`]
//! trait. [`request_blessing`] wraps any source so the caller always gets a
//! usable [`Blessing`]: transport and parse failures turn into the fixed
//! fallback, and a reply missing one field only loses that field.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiBlessings;

use crate::error::BlessingError;
use crate::shape::ShapeId;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Title used when the whole request fails.
pub const FALLBACK_TITLE: &str = "Christmas Miracle";
/// Message used when the whole request fails.
pub const FALLBACK_MESSAGE: &str =
    "In this magical moment, may every good thing arrive as promised.";
/// Title used when a reply arrives without one.
pub const DEFAULT_TITLE: &str = "Merry Christmas";
/// Message used when a reply arrives without one.
pub const DEFAULT_MESSAGE: &str = "May your winter days be filled with warmth and laughter.";

/// A title and message shown alongside a shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blessing {
    pub shape: ShapeId,
    pub title: String,
    pub message: String,
}

impl Blessing {
    /// The fixed blessing shown when the generator cannot be reached.
    pub fn fallback(shape: ShapeId) -> Self {
        Self {
            shape,
            title: FALLBACK_TITLE.to_string(),
            message: FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Fill in whichever fields the reply is missing.
    pub fn from_reply(shape: ShapeId, reply: BlessingReply) -> Self {
        Self {
            shape,
            title: reply.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: reply.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        }
    }
}

/// Raw reply from a text generator. Either field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlessingReply {
    pub title: Option<String>,
    pub message: Option<String>,
}

impl BlessingReply {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: Some(message.into()),
        }
    }

    /// Parse a JSON reply field by field.
    ///
    /// Text that is not JSON at all is an error. Valid JSON keeps every
    /// non-empty string field it has; anything else becomes `None`.
    pub fn from_json(text: &str) -> Result<Self, BlessingError> {
        let text = text.trim();
        let value: serde_json::Value = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(text)?
        };

        let field = |name: &str| {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            title: field("title"),
            message: field("message"),
        })
    }
}

/// An asynchronous generator of blessing text.
pub trait BlessingSource {
    /// Ask for a blessing for `shape`. May fail.
    fn request(
        &self,
        shape: ShapeId,
    ) -> impl Future<Output = Result<BlessingReply, BlessingError>> + Send;
}

/// Request a blessing, absorbing every failure.
///
/// Never returns an error and never leaves the caller without text.
pub async fn request_blessing<S: BlessingSource>(source: &S, shape: ShapeId) -> Blessing {
    match source.request(shape).await {
        Ok(reply) => Blessing::from_reply(shape, reply),
        Err(e) => {
            log::warn!("failed to generate blessing for {}: {}", shape, e);
            Blessing::fallback(shape)
        }
    }
}

/// Prompt sent to a language model for `shape`.
pub fn blessing_prompt(shape: ShapeId) -> String {
    format!(
        "Generate a short, cool and poetic Christmas blessing based on the shape: {}.\n\
         The shape stands for {}.\n\
         The blessing should feel premium, like a holiday gift.\n\
         Answer as a JSON object with the string fields \"title\" and \"message\".",
        shape.name(),
        shape.blessing_context()
    )
}

/// Offline source with one canned blessing per shape.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticBlessings;

impl StaticBlessings {
    pub fn reply_for(shape: ShapeId) -> BlessingReply {
        let (title, message) = match shape {
            ShapeId::Tree => ("Evergreen Wishes", "May your days stay green and your nights glow gold."),
            ShapeId::Diamond => ("Legendary Drop", "Rare things find those who keep going. This one found you."),
            ShapeId::Magazine => ("Pages of the Year", "Every step you took this year is worth remembering."),
            ShapeId::Bell => ("Ringing in Joy", "May good news find you as clearly as a bell on a still night."),
            ShapeId::Firework => ("Bright Skies Ahead", "May the year ahead burst open with light."),
            ShapeId::Star => ("Guiding Light", "May a steady star lead you home."),
            ShapeId::Heart => ("Warm Hearts", "May love keep every winter soft."),
            ShapeId::Airplane => ("Safe Travels Home", "May every road and runway bring you back to those you love."),
            ShapeId::Toothbrush => ("Bright Smiles", "May small daily joys keep you smiling all season."),
            ShapeId::Sock => ("Full Stockings", "May your stocking overflow with happy surprises."),
        };
        BlessingReply::new(title, message)
    }
}

impl BlessingSource for StaticBlessings {
    async fn request(&self, shape: ShapeId) -> Result<BlessingReply, BlessingError> {
        Ok(Self::reply_for(shape))
    }
}
