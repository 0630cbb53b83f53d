// tests/support/mocks/store.rs
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use linkpage_core::domain::{
    avatar::{Avatar, AvatarRepository},
    errors::{DomainError, DomainResult},
    link::{Link, LinkId, LinkRepository, LinkUpdate, NewLink},
    page::{NewPage, Page, PageId, PageReadRepository, PageSlug, PageUpdate, PageWriteRepository},
    user::UserId,
};
use tokio::sync::Barrier;

#[derive(Default)]
struct State {
    pages: BTreeMap<i64, Page>,
    links: BTreeMap<i64, Link>,
    avatars: HashMap<UserId, Avatar>,
    next_page_id: i64,
    next_link_id: i64,
}

/// In-memory stand-in for the pages, links and images tables.
///
/// Page inserts enforce slug uniqueness the way the database constraint does,
/// so a stale availability check still ends in `SlugConflict`.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    slug_lookups: AtomicUsize,
    page_inserts: AtomicUsize,
    blind_slug_lookups: AtomicBool,
    fail_slug_lookups: AtomicBool,
    lookup_barrier: Option<Arc<Barrier>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Slug lookups answer, then wait until `parties` lookups have answered.
    /// Concurrent creations all pass the availability check before any insert.
    pub fn racing(parties: usize) -> Arc<Self> {
        Arc::new(Self {
            lookup_barrier: Some(Arc::new(Barrier::new(parties))),
            ..Self::default()
        })
    }

    /// Slug lookups report nothing, whatever is stored.
    pub fn blind_slug_lookups(&self) {
        self.blind_slug_lookups.store(true, Ordering::SeqCst);
    }

    pub fn fail_slug_lookups(&self) {
        self.fail_slug_lookups.store(true, Ordering::SeqCst);
    }

    pub fn slug_lookups(&self) -> usize {
        self.slug_lookups.load(Ordering::SeqCst)
    }

    pub fn page_inserts(&self) -> usize {
        self.page_inserts.load(Ordering::SeqCst)
    }

    pub fn page_count(&self) -> usize {
        self.state.lock().unwrap().pages.len()
    }

    pub fn link_count(&self) -> usize {
        self.state.lock().unwrap().links.len()
    }
}

#[async_trait]
impl PageWriteRepository for InMemoryStore {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        self.page_inserts.fetch_add(1, Ordering::SeqCst);
        let state = &mut *self.state.lock().unwrap();
        if state.pages.values().any(|p| p.slug == page.slug) {
            return Err(DomainError::SlugConflict(page.slug.into_inner()));
        }
        state.next_page_id += 1;
        let stored = Page {
            id: PageId::new(state.next_page_id)?,
            slug: page.slug,
            title: page.title,
            description: page.description,
            owner_id: page.owner_id,
            created_at: page.created_at,
        };
        state.pages.insert(state.next_page_id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let mut state = self.state.lock().unwrap();
        let page = state
            .pages
            .get_mut(&i64::from(update.id))
            .filter(|page| page.owner_id == update.owner_id)
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        if let Some(title) = update.title {
            page.title = title;
        }
        if let Some(description) = update.description {
            page.description = description;
        }
        Ok(page.clone())
    }

    async fn delete(&self, id: PageId, owner_id: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let key = i64::from(id);
        if !state.pages.get(&key).is_some_and(|p| p.owner_id == owner_id) {
            return Err(DomainError::NotFound("page not found".into()));
        }
        state.links.retain(|_, link| link.page_id != id);
        state.pages.remove(&key);
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        Ok(self.state.lock().unwrap().pages.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_slug_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        let found = if self.blind_slug_lookups.load(Ordering::SeqCst) {
            None
        } else {
            let state = self.state.lock().unwrap();
            state.pages.values().find(|p| p.slug == *slug).cloned()
        };
        if let Some(barrier) = &self.lookup_barrier {
            barrier.wait().await;
        }
        Ok(found)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Page>> {
        let state = self.state.lock().unwrap();
        let mut pages: Vec<Page> = state
            .pages
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        pages.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(pages)
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<Link>> {
        let state = self.state.lock().unwrap();
        let mut links: Vec<Link> = state
            .links
            .values()
            .filter(|l| l.page_id == page_id)
            .cloned()
            .collect();
        links.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(links)
    }

    async fn find(&self, page_id: PageId, id: LinkId) -> DomainResult<Option<Link>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .links
            .get(&i64::from(id))
            .filter(|l| l.page_id == page_id)
            .cloned())
    }

    async fn insert(&self, link: NewLink) -> DomainResult<Link> {
        let state = &mut *self.state.lock().unwrap();
        if !state.pages.contains_key(&i64::from(link.page_id)) {
            return Err(DomainError::NotFound("page not found".into()));
        }
        state.next_link_id += 1;
        let stored = Link {
            id: LinkId::new(state.next_link_id)?,
            page_id: link.page_id,
            title: link.title,
            url: link.url,
            image_url: link.image_url,
            created_at: link.created_at,
        };
        state.links.insert(state.next_link_id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: LinkUpdate) -> DomainResult<Link> {
        let mut state = self.state.lock().unwrap();
        let link = state
            .links
            .get_mut(&i64::from(update.id))
            .filter(|l| l.page_id == update.page_id)
            .ok_or_else(|| DomainError::NotFound("link not found".into()))?;
        link.title = update.title;
        link.url = update.url;
        link.image_url = update.image_url;
        Ok(link.clone())
    }

    async fn delete(&self, page_id: PageId, id: LinkId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let key = i64::from(id);
        if !state.links.get(&key).is_some_and(|l| l.page_id == page_id) {
            return Err(DomainError::NotFound("link not found".into()));
        }
        state.links.remove(&key);
        Ok(())
    }
}

#[async_trait]
impl AvatarRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Avatar>> {
        Ok(self.state.lock().unwrap().avatars.get(&user_id).cloned())
    }

    async fn upsert(&self, avatar: Avatar) -> DomainResult<Avatar> {
        let mut state = self.state.lock().unwrap();
        state.avatars.insert(avatar.user_id, avatar.clone());
        Ok(avatar)
    }
}
