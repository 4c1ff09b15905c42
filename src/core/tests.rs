#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    use crate::core::{
        BlogPost, ContentError, IntersectionCallback, ObserverAction, ObserverPlatform, PostQuery,
        VisibilityObserver, VisibilityOptions, VisibilityState, adjacent_posts, all_posts,
        categories, filter_posts, related_posts, resolve_post_by_slug,
    };

    // ========================================================================
    // Fixtures
    // ========================================================================

    /// Four posts `a`..`d`; only `c` is written by Grace Hopper
    fn scenario() -> Vec<BlogPost> {
        vec![
            BlogPost::new(1, "Intro to agents", "a")
                .with_category("AI")
                .with_author("Alex Johnson")
                .with_excerpt("Getting started"),
            BlogPost::new(2, "Pricing your support", "b")
                .with_category("Business")
                .with_author("Maria Chen")
                .with_excerpt("Costs and savings"),
            BlogPost::new(3, "Agents in production", "c")
                .with_category("AI")
                .with_author("Grace Hopper")
                .with_excerpt("Lessons learned"),
            BlogPost::new(4, "Hand-off design", "d")
                .with_category("AI")
                .with_author("Sophia Lee")
                .with_excerpt("When to escalate"),
        ]
    }

    fn slugs(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    fn satisfies(post: &BlogPost, text: &str, category: Option<&str>) -> bool {
        let needle = text.to_lowercase();
        let text_ok = post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle)
            || post.author.to_lowercase().contains(&needle);
        let category_ok = category.is_none_or(|c| post.category == c);
        text_ok && category_ok
    }

    fn queries(posts: &[BlogPost]) -> Vec<PostQuery> {
        let texts = ["", "ai", "AI", "agent", "chen", "SUPPORT", "roi", "zzz", " "];
        let mut cats: Vec<Option<String>> = vec![None, Some("Not A Category".to_string())];
        cats.extend(categories(posts).into_iter().map(|c| Some(c.to_string())));

        let mut out = Vec::new();
        for text in texts {
            for category in &cats {
                out.push(PostQuery {
                    text: text.to_string(),
                    category: category.clone(),
                });
            }
        }
        out
    }

    // ========================================================================
    // Content query properties
    // ========================================================================

    #[test]
    fn test_filter_correctness_seed() {
        let posts = all_posts();
        for query in queries(posts) {
            let result = filter_posts(posts, &query);
            let ids: HashSet<u32> = result.iter().map(|p| p.id).collect();
            for post in posts {
                let expected = satisfies(post, &query.text, query.category.as_deref());
                assert_eq!(ids.contains(&post.id), expected, "{:?} / {}", query, post.slug);
            }
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let posts = all_posts();
        for query in queries(posts) {
            let result = filter_posts(posts, &query);
            let positions: Vec<usize> = result
                .iter()
                .map(|r| posts.iter().position(|p| p.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", query);
        }
    }

    #[test]
    fn test_filter_idempotence() {
        let posts = all_posts();
        for query in queries(posts) {
            let once: Vec<BlogPost> = filter_posts(posts, &query).into_iter().cloned().collect();
            let twice = filter_posts(&once, &query);
            assert_eq!(slugs(&twice), once.iter().map(|p| p.slug.clone()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_category_enumeration_completeness() {
        let posts = all_posts();
        let derived: HashSet<&str> = categories(posts).into_iter().collect();
        let actual: HashSet<&str> = posts.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(derived, actual);
        assert_eq!(categories(posts).len(), actual.len());
    }

    #[test]
    fn test_related_posts_invariants() {
        let posts = all_posts();
        for post in posts {
            let related = related_posts(posts, post);
            assert!(related.len() <= 2);
            for other in &related {
                assert_ne!(other.id, post.id);
                assert_eq!(other.category, post.category);
            }
        }
    }

    #[test]
    fn test_related_posts_in_seed() {
        let posts = all_posts();
        let first = &posts[0];
        let related = related_posts(posts, first);
        assert_eq!(slugs(&related), vec!["designing-ai-conversations-customers-trust"]);
    }

    #[test]
    fn test_adjacency_boundaries() {
        let posts = all_posts();
        let first = adjacent_posts(posts, &posts[0]);
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|p| p.id), Some(posts[1].id));

        let last = adjacent_posts(posts, &posts[posts.len() - 1]);
        assert!(last.next.is_none());

        for i in 1..posts.len() - 1 {
            let adj = adjacent_posts(posts, &posts[i]);
            assert_eq!(adj.previous.map(|p| p.id), Some(posts[i - 1].id));
            assert_eq!(adj.next.map(|p| p.id), Some(posts[i + 1].id));
        }
    }

    #[test]
    fn test_slug_resolution() {
        let posts = all_posts();
        for post in posts {
            let found = resolve_post_by_slug(posts, &post.slug).unwrap();
            assert_eq!(found.id, post.id);
        }

        assert!(resolve_post_by_slug(posts, "").is_err());
        assert!(resolve_post_by_slug(posts, "does-not-exist").is_err());
        let shouted = posts[0].slug.to_uppercase();
        assert_eq!(
            resolve_post_by_slug(posts, &shouted),
            Err(ContentError::PostNotFound { slug: shouted.clone() })
        );
    }

    #[test]
    fn test_example_scenario() {
        let posts = scenario();

        let b = resolve_post_by_slug(&posts, "b").unwrap();
        assert_eq!(b.slug, "b");

        let adj = adjacent_posts(&posts, b);
        assert_eq!(adj.previous.map(|p| p.slug.as_str()), Some("a"));
        assert_eq!(adj.next.map(|p| p.slug.as_str()), Some("c"));

        let all = filter_posts(&posts, &PostQuery::default());
        assert_eq!(slugs(&all), vec!["a", "b", "c", "d"]);

        let by_author = filter_posts(&posts, &PostQuery::new("hopper"));
        assert_eq!(slugs(&by_author), vec!["c"]);
    }

    #[test]
    fn test_scenario_category_and_text_combine() {
        let posts = scenario();
        let query = PostQuery::new("agents").in_category("AI");
        assert_eq!(slugs(&filter_posts(&posts, &query)), vec!["a", "c"]);

        let query = PostQuery::new("agents").in_category("Business");
        assert!(filter_posts(&posts, &query).is_empty());
    }

    // ========================================================================
    // Visibility observer lifecycle
    // ========================================================================

    struct FakeWatcher {
        callback: IntersectionCallback,
        attached: Rc<Cell<bool>>,
        released: bool,
        options: VisibilityOptions,
    }

    /// Records every registration and keeps callbacks around after detach,
    /// so tests can simulate a report that races with unmount.
    #[derive(Default, Clone)]
    struct FakePlatform {
        watchers: Rc<RefCell<Vec<FakeWatcher>>>,
    }

    struct FakeHandle {
        attached: Rc<Cell<bool>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.attached.set(false);
        }
    }

    impl ObserverPlatform for FakePlatform {
        type Handle = FakeHandle;

        fn observe(
            &self,
            options: &VisibilityOptions,
            callback: IntersectionCallback,
        ) -> Self::Handle {
            let attached = Rc::new(Cell::new(true));
            self.watchers.borrow_mut().push(FakeWatcher {
                callback,
                attached: attached.clone(),
                released: false,
                options: options.clone(),
            });
            FakeHandle { attached }
        }
    }

    impl FakePlatform {
        fn fire(&self, index: usize, intersecting: bool) -> ObserverAction {
            let mut watchers = self.watchers.borrow_mut();
            let watcher = &mut watchers[index];
            let action = (watcher.callback)(intersecting);
            if action == ObserverAction::Release {
                watcher.released = true;
            }
            action
        }

        fn is_attached(&self, index: usize) -> bool {
            self.watchers.borrow()[index].attached.get()
        }

        fn is_released(&self, index: usize) -> bool {
            self.watchers.borrow()[index].released
        }
    }

    fn recorder() -> (
        Rc<RefCell<Vec<VisibilityState>>>,
        impl FnMut(VisibilityState) + 'static,
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |state| sink.borrow_mut().push(state))
    }

    #[test]
    fn test_observer_passes_options_to_platform() {
        let platform = FakePlatform::default();
        let options = VisibilityOptions::once()
            .with_threshold(0.25)
            .with_root_margin("0px 0px -50px 0px");
        let (_calls, on_change) = recorder();
        let _observer = VisibilityObserver::attach(&platform, &options, on_change);

        assert_eq!(platform.watchers.borrow()[0].options, options);
    }

    #[test]
    fn test_no_callbacks_after_unmount() {
        let platform = FakePlatform::default();
        let (calls, on_change) = recorder();
        let observer =
            VisibilityObserver::attach(&platform, &VisibilityOptions::default(), on_change);

        assert_eq!(platform.fire(0, true), ObserverAction::Continue);
        assert_eq!(calls.borrow().len(), 1);
        assert!(calls.borrow()[0].is_intersecting);

        drop(observer);
        assert!(!platform.is_attached(0));

        assert_eq!(platform.fire(0, false), ObserverAction::Release);
        assert_eq!(platform.fire(0, true), ObserverAction::Release);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_unmount_before_first_report() {
        let platform = FakePlatform::default();
        let (calls, on_change) = recorder();
        let mut observer =
            VisibilityObserver::attach(&platform, &VisibilityOptions::once(), on_change);

        observer.detach();
        assert!(!observer.is_attached());
        assert!(!platform.is_attached(0));

        platform.fire(0, true);
        observer.record_scroll(0.0, 100.0, 800.0);
        assert!(calls.borrow().is_empty());
        assert_eq!(observer.state(), VisibilityState::default());
    }

    #[test]
    fn test_once_mode_releases_after_first_sighting() {
        let platform = FakePlatform::default();
        let (calls, on_change) = recorder();
        let observer =
            VisibilityObserver::attach(&platform, &VisibilityOptions::once(), on_change);

        assert_eq!(platform.fire(0, false), ObserverAction::Continue);
        assert_eq!(platform.fire(0, true), ObserverAction::Release);
        assert!(platform.is_released(0));
        assert_eq!(calls.borrow().len(), 2);

        // A straggling report is not re-evaluated
        platform.fire(0, false);
        assert_eq!(calls.borrow().len(), 2);
        assert!(observer.state().has_been_seen);
        assert!(observer.state().is_intersecting);
    }

    #[test]
    fn test_scroll_progress_keeps_updating_after_release() {
        let platform = FakePlatform::default();
        let (calls, on_change) = recorder();
        let observer =
            VisibilityObserver::attach(&platform, &VisibilityOptions::once(), on_change);

        platform.fire(0, true);
        observer.record_scroll(300.0, 200.0, 800.0);
        assert_eq!(observer.state().scroll_progress, 50.0);
        assert_eq!(calls.borrow().last().unwrap().scroll_progress, 50.0);

        // Unchanged progress does not notify
        let before = calls.borrow().len();
        observer.record_scroll(300.0, 200.0, 800.0);
        assert_eq!(calls.borrow().len(), before);
    }

    #[test]
    fn test_observers_are_independent() {
        let platform = FakePlatform::default();
        let (first_calls, first) = recorder();
        let (second_calls, second) = recorder();
        let observer_a =
            VisibilityObserver::attach(&platform, &VisibilityOptions::default(), first);
        let observer_b =
            VisibilityObserver::attach(&platform, &VisibilityOptions::default(), second);

        platform.fire(1, true);
        assert!(first_calls.borrow().is_empty());
        assert_eq!(second_calls.borrow().len(), 1);

        drop(observer_a);
        assert!(!platform.is_attached(0));
        assert!(platform.is_attached(1));

        platform.fire(1, false);
        assert_eq!(second_calls.borrow().len(), 2);
        assert!(!observer_b.state().is_intersecting);
    }

    type ObserverSlot = Rc<RefCell<Option<VisibilityObserver<FakePlatform>>>>;

    #[test]
    fn test_subscriber_can_read_state_during_callback() {
        let platform = FakePlatform::default();
        let slot: ObserverSlot = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = slot.clone();
        let sink = seen.clone();
        let observer = VisibilityObserver::attach(
            &platform,
            &VisibilityOptions::default(),
            move |reported| {
                let current = reader.borrow().as_ref().map(|o| o.state());
                sink.borrow_mut().push((reported, current));
            },
        );
        *slot.borrow_mut() = Some(observer);

        assert_eq!(platform.fire(0, true), ObserverAction::Continue);
        if let Some(observer) = slot.borrow().as_ref() {
            observer.record_scroll(300.0, 200.0, 800.0);
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        for (reported, current) in seen.iter() {
            assert_eq!(Some(*reported), *current);
        }
        assert!(seen[1].0.is_intersecting);
        assert_eq!(seen[1].0.scroll_progress, 50.0);

        slot.borrow_mut().take();
    }

    #[test]
    fn test_subscriber_can_feed_scroll_during_callback() {
        let platform = FakePlatform::default();
        let slot: ObserverSlot = Rc::new(RefCell::new(None));
        let (calls, mut record) = recorder();

        let feeder = slot.clone();
        let observer = VisibilityObserver::attach(
            &platform,
            &VisibilityOptions::once(),
            move |state| {
                record(state);
                if let Some(observer) = feeder.borrow().as_ref() {
                    observer.record_scroll(300.0, 200.0, 800.0);
                }
            },
        );
        *slot.borrow_mut() = Some(observer);

        assert_eq!(platform.fire(0, true), ObserverAction::Release);

        // The nested change is not reported again but is visible in the state
        assert_eq!(calls.borrow().len(), 1);
        let state = slot.borrow().as_ref().map(|o| o.state());
        assert_eq!(state.map(|s| s.scroll_progress), Some(50.0));
        assert_eq!(state.map(|s| s.has_been_seen), Some(true));

        slot.borrow_mut().take();
    }
}
