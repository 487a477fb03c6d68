//! Paginated feed with simulated fetches and infinite scroll.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PostCard;
use crate::domain::{Post, VoteDirection, VoteOutcome};
use crate::route::Section;

/// Once the feed holds more posts than this, no further pages are offered.
pub const FEED_EXHAUSTED_AFTER: usize = 20;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Identifies one pending load. Completions carrying any other ticket are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LoadTicket(u64);

/// Answer to a load-more request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    Started(LoadTicket),
    AlreadyLoading,
    Exhausted,
}

/// Scroll geometry reported by the client, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScrollPosition {
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub document_height: f64,
}

impl ScrollPosition {
    pub fn at_bottom(&self) -> bool {
        self.viewport_height + self.scroll_top >= self.document_height
    }
}

/// State of one mounted feed.
#[derive(Debug, Clone)]
pub struct FeedState {
    section: Section,
    cards: Vec<PostCard>,
    loading: bool,
    has_more: bool,
    pending: Option<LoadTicket>,
    next_ticket: u64,
    last_stamp: i64,
}

impl FeedState {
    /// Mount a feed. The feed starts empty and loading; complete the
    /// returned ticket with [`FeedState::complete_initial`].
    pub fn mount(section: Section) -> (Self, LoadTicket) {
        let mut feed = Self {
            section,
            cards: Vec::new(),
            loading: false,
            has_more: true,
            pending: None,
            next_ticket: 0,
            last_stamp: 0,
        };
        let ticket = feed.start_load();
        (feed, ticket)
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    fn start_load(&mut self) -> LoadTicket {
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.loading = true;
        self.pending = Some(ticket);
        ticket
    }

    /// Take ownership of the pending load if `ticket` still names it.
    fn settle(&mut self, ticket: LoadTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.loading = false;
        true
    }

    /// Populate the feed with the first page.
    ///
    /// Returns `false` and leaves the feed untouched for a stale ticket.
    pub fn complete_initial(&mut self, ticket: LoadTicket, posts: Vec<Post>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.cards = posts.into_iter().map(PostCard::new).collect();
        true
    }

    /// Ask for another page. Refused while a load is in flight or once the
    /// feed is exhausted.
    pub fn request_more(&mut self) -> LoadMore {
        if self.loading {
            return LoadMore::AlreadyLoading;
        }
        if !self.has_more {
            return LoadMore::Exhausted;
        }
        LoadMore::Started(self.start_load())
    }

    /// Infinite-scroll hook: requests a page when the viewport has reached
    /// the bottom of the document. `None` when it has not.
    pub fn on_scroll(&mut self, position: ScrollPosition) -> Option<LoadMore> {
        if !position.at_bottom() {
            return None;
        }
        Some(self.request_more())
    }

    /// Append a re-keyed copy of `fixtures` for the pending page.
    ///
    /// Returns `false` and leaves the feed untouched for a stale ticket.
    pub fn complete_more<R: Rng + ?Sized>(
        &mut self,
        ticket: LoadTicket,
        fixtures: &[Post],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }

        // Keep stamps strictly increasing so two pages never share ids.
        let stamp = now.timestamp_millis().max(self.last_stamp + 1);
        self.last_stamp = stamp;

        let page = fabricate_page(fixtures, stamp, now, rng);
        self.cards.extend(page.into_iter().map(PostCard::new));

        if self.cards.len() > FEED_EXHAUSTED_AFTER {
            self.has_more = false;
        }
        true
    }

    /// Vote on the first card showing `post_id`.
    pub fn vote(&mut self, post_id: &str, direction: VoteDirection) -> Option<VoteOutcome> {
        self.cards
            .iter_mut()
            .find(|card| card.post.id == post_id)
            .map(|card| card.vote(direction))
    }
}

/// Copy every fixture post under a fresh id `"{id}_{stamp}_{index}"` with a
/// creation time somewhere in the 24 hours before `now`.
pub fn fabricate_page<R: Rng + ?Sized>(
    fixtures: &[Post],
    stamp: i64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Post> {
    fixtures
        .iter()
        .enumerate()
        .map(|(index, post)| {
            let age = Duration::milliseconds(rng.gen_range(0..DAY_MILLIS));
            post.rekeyed(format!("{}_{}_{}", post.id, stamp, index), now - age)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::VoteState;
    use crate::test_support;

    fn loaded_feed() -> FeedState {
        let (mut feed, ticket) = FeedState::mount(Section::Hot);
        assert!(feed.complete_initial(ticket, test_support::posts()));
        feed
    }

    fn load_page(feed: &mut FeedState, rng: &mut StdRng) {
        let LoadMore::Started(ticket) = feed.request_more() else {
            panic!("load was refused");
        };
        assert!(feed.complete_more(ticket, &test_support::posts(), Utc::now(), rng));
    }

    #[test]
    fn test_mount_starts_loading() {
        let (feed, _) = FeedState::mount(Section::Fresh);
        assert!(feed.is_loading());
        assert!(feed.is_empty());
        assert!(feed.has_more());
        assert_eq!(feed.section(), Section::Fresh);
    }

    #[test]
    fn test_initial_load_populates_fixture_list() {
        let feed = loaded_feed();
        assert!(!feed.is_loading());
        assert_eq!(feed.len(), 5);
        assert_eq!(feed.cards()[0].post.id, "1");
    }

    #[test]
    fn test_load_more_doubles_with_distinct_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut feed = loaded_feed();
        let original: HashSet<String> = feed.cards().iter().map(|c| c.post.id.clone()).collect();

        load_page(&mut feed, &mut rng);

        assert_eq!(feed.len(), 10);
        let ids: HashSet<String> = feed.cards().iter().map(|c| c.post.id.clone()).collect();
        assert_eq!(ids.len(), 10);
        let new_ids: Vec<_> = ids.difference(&original).collect();
        assert_eq!(new_ids.len(), 5);
        assert!(new_ids.iter().all(|id| id.contains('_')));
    }

    #[test]
    fn test_fabricated_timestamps_fall_within_a_day() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Utc::now();
        let page = fabricate_page(&test_support::posts(), 42, now, &mut rng);
        assert_eq!(page[3].id, "4_42_3");
        for post in page {
            assert!(post.created_at <= now);
            assert!(now - post.created_at < Duration::days(1));
        }
    }

    #[test]
    fn test_load_more_is_refused_while_loading() {
        let mut feed = loaded_feed();
        assert!(matches!(feed.request_more(), LoadMore::Started(_)));
        assert_eq!(feed.request_more(), LoadMore::AlreadyLoading);
    }

    #[test]
    fn test_feed_is_exhausted_past_twenty_posts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut feed = loaded_feed();

        // 5 -> 10 -> 15 -> 20 keeps paging.
        for _ in 0..3 {
            load_page(&mut feed, &mut rng);
            assert!(feed.has_more());
        }
        load_page(&mut feed, &mut rng);
        assert_eq!(feed.len(), 25);
        assert!(!feed.has_more());

        assert_eq!(feed.request_more(), LoadMore::Exhausted);
        assert_eq!(feed.len(), 25);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut feed, first) = FeedState::mount(Section::Hot);
        assert!(feed.complete_initial(first, test_support::posts()));
        assert!(!feed.complete_initial(first, test_support::posts()));
        assert_eq!(feed.len(), 5);
    }

    #[test]
    fn test_scroll_triggers_only_at_bottom() {
        let mut feed = loaded_feed();
        let middle = ScrollPosition {
            viewport_height: 800.0,
            scroll_top: 100.0,
            document_height: 2000.0,
        };
        assert_eq!(feed.on_scroll(middle), None);

        let bottom = ScrollPosition {
            scroll_top: 1200.0,
            ..middle
        };
        assert!(matches!(feed.on_scroll(bottom), Some(LoadMore::Started(_))));
        assert_eq!(feed.on_scroll(bottom), Some(LoadMore::AlreadyLoading));
    }

    #[test]
    fn test_card_votes_are_independent() {
        let mut feed = loaded_feed();
        let outcome = feed.vote("2", VoteDirection::Up).unwrap();
        assert_eq!(outcome.score, 2319);
        assert_eq!(feed.cards()[0].vote, VoteState::None);
        assert_eq!(feed.cards()[1].score(), 2319);
        assert!(feed.vote("missing", VoteDirection::Up).is_none());
    }
}
