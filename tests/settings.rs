#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use tasktree::libs::settings::{self, SettingChange, SettingValue, Settings, SettingsError};
    use test_context::{test_context, TestContext};

    /// Settings with a listener that records every change it receives.
    struct SettingsTestContext {
        settings: Settings,
        received: Rc<RefCell<Vec<SettingChange>>>,
    }

    impl TestContext for SettingsTestContext {
        fn setup() -> Self {
            let mut settings = Settings::default();
            let received = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&received);
            settings.subscribe(move |change: &SettingChange| sink.borrow_mut().push(change.clone()));
            SettingsTestContext { settings, received }
        }
    }

    #[test]
    fn test_documented_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.text(settings::THEME), Some("light"));
        assert_eq!(settings.text(settings::LANGUAGE), Some("en"));
        assert_eq!(settings.flag(settings::SHOW_COMPLETED), Some(true));
        assert_eq!(settings.flag(settings::AUTO_SAVE), Some(true));
        assert_eq!(settings.number(settings::NOTIFICATION_TIMEOUT), Some(3000));
        assert_eq!(settings.number(settings::MAX_NOTIFICATIONS), Some(5));
        assert_eq!(settings.text(settings::DEFAULT_TASK_COLOR), Some("#3498db"));
        assert_eq!(settings.text(settings::DEFAULT_CATEGORY), Some("generic"));
        assert_eq!(settings.flag(settings::SIDEBAR_COLLAPSED), Some(false));
        assert_eq!(settings.entries().count(), 9);
    }

    #[test]
    fn test_unknown_key_reads_none() {
        let settings = Settings::default();
        assert!(settings.get("fontSize").is_none());
        assert!(settings.text(settings::SHOW_COMPLETED).is_none());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_set_notifies_listener(ctx: &mut SettingsTestContext) {
        ctx.settings.set(settings::THEME, SettingValue::from("dark")).unwrap();

        assert_eq!(ctx.settings.text(settings::THEME), Some("dark"));
        assert_eq!(
            *ctx.received.borrow(),
            vec![SettingChange::Updated {
                key: "theme".to_string(),
                value: SettingValue::from("dark"),
            }]
        );
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_unknown_key_is_rejected_silently(ctx: &mut SettingsTestContext) {
        let result = ctx.settings.set("fontSize", SettingValue::from(14u64));

        assert_eq!(result, Err(SettingsError::UnknownKey("fontSize".to_string())));
        assert!(ctx.settings.get("fontSize").is_none());
        assert!(ctx.received.borrow().is_empty());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_type_mismatch_leaves_value(ctx: &mut SettingsTestContext) {
        let result = ctx.settings.set(settings::AUTO_SAVE, SettingValue::from("sometimes"));

        assert!(matches!(result, Err(SettingsError::TypeMismatch { .. })));
        assert_eq!(ctx.settings.flag(settings::AUTO_SAVE), Some(true));
        assert!(ctx.received.borrow().is_empty());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_reset_restores_every_default(ctx: &mut SettingsTestContext) {
        ctx.settings.set(settings::THEME, SettingValue::from("dark")).unwrap();
        ctx.settings.set(settings::NOTIFICATION_TIMEOUT, SettingValue::from(100u64)).unwrap();
        ctx.settings.set(settings::SIDEBAR_COLLAPSED, SettingValue::from(true)).unwrap();

        ctx.settings.reset_to_defaults();

        for (key, value) in settings::defaults() {
            assert_eq!(ctx.settings.get(key), Some(&value), "setting '{}' not restored", key);
        }
        assert_eq!(ctx.received.borrow().last(), Some(&SettingChange::Reset));
        assert_eq!(ctx.received.borrow().len(), 4);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_unsubscribe_stops_notifications(ctx: &mut SettingsTestContext) {
        let extra = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&extra);
        let id = ctx.settings.subscribe(move |_: &SettingChange| *counter.borrow_mut() += 1);

        ctx.settings.set(settings::LANGUAGE, SettingValue::from("de")).unwrap();
        assert!(ctx.settings.unsubscribe(id));
        assert!(!ctx.settings.unsubscribe(id));
        ctx.settings.set(settings::LANGUAGE, SettingValue::from("fr")).unwrap();

        assert_eq!(*extra.borrow(), 1);
        assert_eq!(ctx.received.borrow().len(), 2);
    }

    #[test]
    fn test_parsed_values_fit_their_settings() {
        let mut settings = Settings::default();
        for (key, raw) in [
            (settings::SHOW_COMPLETED, "false"),
            (settings::MAX_NOTIFICATIONS, "10"),
            (settings::DEFAULT_TASK_COLOR, "#ff0000"),
            (settings::LANGUAGE, "42"),
        ] {
            let value = settings.parse_for(key, raw).unwrap();
            settings.set(key, value).unwrap();
        }

        assert_eq!(settings.flag(settings::SHOW_COMPLETED), Some(false));
        assert_eq!(settings.number(settings::MAX_NOTIFICATIONS), Some(10));
        assert_eq!(settings.text(settings::DEFAULT_TASK_COLOR), Some("#ff0000"));
        assert_eq!(settings.text(settings::LANGUAGE), Some("42"));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_unparsable_input_is_rejected_before_set(ctx: &mut SettingsTestContext) {
        let result = ctx.settings.parse_for(settings::AUTO_SAVE, "sometimes");

        assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));
        assert_eq!(ctx.settings.flag(settings::AUTO_SAVE), Some(true));
        assert!(ctx.received.borrow().is_empty());
    }
}
