use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Maps to the `reaction_type` enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[sqlx(type_name = "reaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReactionType {
    Sigh,
    Facepalm,
    Cringe,
    Seen,
}

/// One user's reaction as aggregated by the `posts_with_reactions` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostReaction {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
}

/// A post row from `posts_with_reactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(json)]
    pub reactions: Vec<PostReaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub owner_id: Uuid,
}

/// Per-type reaction tallies for a single post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub sigh: u32,
    pub facepalm: u32,
    pub cringe: u32,
    pub seen: u32,
}

impl ReactionCounts {
    pub fn get(&self, reaction_type: ReactionType) -> u32 {
        match reaction_type {
            ReactionType::Sigh => self.sigh,
            ReactionType::Facepalm => self.facepalm,
            ReactionType::Cringe => self.cringe,
            ReactionType::Seen => self.seen,
        }
    }

    pub fn total(&self) -> u32 {
        self.sigh + self.facepalm + self.cringe + self.seen
    }
}

impl Post {
    pub fn reaction_counts(&self) -> ReactionCounts {
        let mut counts = ReactionCounts::default();
        for reaction in &self.reactions {
            match reaction.reaction_type {
                ReactionType::Sigh => counts.sigh += 1,
                ReactionType::Facepalm => counts.facepalm += 1,
                ReactionType::Cringe => counts.cringe += 1,
                ReactionType::Seen => counts.seen += 1,
            }
        }
        counts
    }

    /// The reaction left by `user_id`, if any. The view holds at most one per user.
    pub fn reaction_of(&self, user_id: Uuid) -> Option<ReactionType> {
        self.reactions
            .iter()
            .find(|reaction| reaction.user_id == user_id)
            .map(|reaction| reaction.reaction_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with(reactions: Vec<PostReaction>) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::now_v7(),
            title: "Monday".to_string(),
            content: "again".to_string(),
            owner_id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            reactions,
        }
    }

    #[test]
    fn test_reaction_column_decodes_view_json() {
        let user_id = Uuid::now_v7();
        let raw = format!(r#"[{{"user_id":"{}","type":"facepalm"}}]"#, user_id);

        let reactions: Vec<PostReaction> = serde_json::from_str(&raw).unwrap();

        assert_eq!(
            reactions,
            vec![PostReaction { user_id, reaction_type: ReactionType::Facepalm }]
        );
    }

    #[test]
    fn test_reaction_counts_groups_by_type() {
        let post = post_with(vec![
            PostReaction { user_id: Uuid::now_v7(), reaction_type: ReactionType::Sigh },
            PostReaction { user_id: Uuid::now_v7(), reaction_type: ReactionType::Sigh },
            PostReaction { user_id: Uuid::now_v7(), reaction_type: ReactionType::Seen },
        ]);

        let counts = post.reaction_counts();

        assert_eq!(counts.get(ReactionType::Sigh), 2);
        assert_eq!(counts.get(ReactionType::Seen), 1);
        assert_eq!(counts.get(ReactionType::Cringe), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_fresh_post_has_no_reactions() {
        let post = post_with(Vec::new());

        assert_eq!(post.reaction_counts(), ReactionCounts::default());
        assert_eq!(post.reaction_of(post.owner_id), None);
    }

    #[test]
    fn test_reaction_type_string_forms() {
        assert_eq!(ReactionType::Facepalm.to_string(), "facepalm");
        assert_eq!("cringe".parse::<ReactionType>().unwrap(), ReactionType::Cringe);
        assert!("meh".parse::<ReactionType>().is_err());
    }
}
