use ferrous_rewrite_domain::{
    Continuation, DomainError, FieldKind, NameMatcher, RecordSection, ResponseRuleConfig,
    RewriteRule, SectionScope,
};

#[test]
fn test_section_scope_parsing() {
    assert_eq!("answer".parse::<SectionScope>(), Ok(SectionScope::Answer));
    assert_eq!("EXTRA".parse::<SectionScope>(), Ok(SectionScope::Extra));
    assert_eq!("additional".parse::<SectionScope>(), Ok(SectionScope::Extra));
    assert_eq!("all".parse::<SectionScope>(), Ok(SectionScope::All));
    assert!("authority".parse::<SectionScope>().is_err());
}

#[test]
fn test_section_scope_covers() {
    assert!(SectionScope::Answer.covers(RecordSection::Answer));
    assert!(!SectionScope::Answer.covers(RecordSection::Extra));
    assert!(SectionScope::Extra.covers(RecordSection::Extra));
    assert!(!SectionScope::Extra.covers(RecordSection::Answer));
    assert!(SectionScope::All.covers(RecordSection::Answer));
    assert!(SectionScope::All.covers(RecordSection::Extra));
}

#[test]
fn test_field_kind_parsing_defaults_to_name() {
    assert_eq!("".parse::<FieldKind>(), Ok(FieldKind::Name));
    assert_eq!("name".parse::<FieldKind>(), Ok(FieldKind::Name));
    assert_eq!("TTL".parse::<FieldKind>(), Ok(FieldKind::Ttl));
    assert!("class".parse::<FieldKind>().is_err());
}

#[test]
fn test_continuation_parsing() {
    assert_eq!("stop".parse::<Continuation>(), Ok(Continuation::Stop));
    assert_eq!("Continue".parse::<Continuation>(), Ok(Continuation::Continue));
    assert!("next".parse::<Continuation>().is_err());
    assert!(Continuation::default().is_stop());
}

#[test]
fn test_name_rule_rewrites_matching_value() {
    let rule = RewriteRule::name(
        SectionScope::Answer,
        NameMatcher::regex(r"(dns)\.(core)\.(rocks)").unwrap(),
        "{2}.{1}.{3}",
    );

    assert_eq!(
        rule.rewrite_name("dns.core.rocks.").as_deref(),
        Some("core.dns.rocks")
    );
    assert!(rule.rewrite_name("example.org.").is_none());
}

#[test]
fn test_ttl_rule_never_rewrites_names() {
    let rule = RewriteRule::ttl(SectionScope::All, 300);
    assert_eq!(rule.field, FieldKind::Ttl);
    assert_eq!(rule.ttl, 300);
    assert!(rule.rewrite_name("dns.core.rocks.").is_none());
}

#[test]
fn test_inactive_rule_applies_nowhere() {
    let rule = RewriteRule::ttl(SectionScope::All, 300).with_active(false);
    assert!(!rule.applies_to(RecordSection::Answer));
    assert!(!rule.applies_to(RecordSection::Extra));
}

#[test]
fn test_from_config_name_rule_normalizes_replacement() {
    let config = ResponseRuleConfig::name("answer", r"(.*)\.cluster\.local", "{1}.domain.uk");
    let rule = RewriteRule::from_config(&config).unwrap();

    assert_eq!(rule.section, SectionScope::Answer);
    assert_eq!(rule.field, FieldKind::Name);
    assert_eq!(&*rule.replacement, "{1}.domain.uk.");
    assert_eq!(
        rule.rewrite_name("srv1.my.cluster.local.").as_deref(),
        Some("srv1.my.domain.uk.")
    );
}

#[test]
fn test_from_config_exact_rule_normalizes_pattern() {
    let config = ResponseRuleConfig {
        match_type: "exact".to_string(),
        ..ResponseRuleConfig::name("all", "dns.core.rocks", "core.dns.rocks")
    };
    let rule = RewriteRule::from_config(&config).unwrap();

    assert_eq!(
        rule.rewrite_name("DNS.core.rocks.").as_deref(),
        Some("core.dns.rocks.")
    );
}

#[test]
fn test_from_config_ttl_rule() {
    let config = ResponseRuleConfig {
        continuation: "continue".to_string(),
        ..ResponseRuleConfig::ttl("extra", 300)
    };
    let rule = RewriteRule::from_config(&config).unwrap();

    assert_eq!(rule.section, SectionScope::Extra);
    assert_eq!(rule.field, FieldKind::Ttl);
    assert_eq!(rule.ttl, 300);
    assert_eq!(rule.continuation, Continuation::Continue);
}

#[test]
fn test_from_config_rejects_missing_pattern() {
    let config = ResponseRuleConfig {
        pattern: None,
        ..ResponseRuleConfig::name("answer", "x", "y")
    };
    assert!(matches!(
        RewriteRule::from_config(&config),
        Err(DomainError::InvalidRewriteRule(_))
    ));
}

#[test]
fn test_from_config_rejects_ttl_rule_without_value() {
    let config = ResponseRuleConfig {
        ttl: None,
        ..ResponseRuleConfig::ttl("answer", 1)
    };
    assert!(RewriteRule::from_config(&config).is_err());
}

#[test]
fn test_from_config_rejects_bad_pattern() {
    let config = ResponseRuleConfig::name("answer", r"(unclosed", "{1}");
    assert!(matches!(
        RewriteRule::from_config(&config),
        Err(DomainError::InvalidPattern(_))
    ));
}

#[test]
fn test_from_config_rejects_unknown_tokens() {
    let bad_section = ResponseRuleConfig::name("authority", "a", "b");
    assert!(RewriteRule::from_config(&bad_section).is_err());

    let bad_match = ResponseRuleConfig {
        match_type: "glob".to_string(),
        ..ResponseRuleConfig::name("answer", "a", "b")
    };
    assert!(RewriteRule::from_config(&bad_match).is_err());
}

#[test]
fn test_build_table_keeps_order_and_reports_index() {
    let configs = vec![
        ResponseRuleConfig::name("answer", "a", "b"),
        ResponseRuleConfig::ttl("all", 60),
    ];
    let table = RewriteRule::build_table(&configs).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].field, FieldKind::Name);
    assert_eq!(table[1].field, FieldKind::Ttl);

    let configs = vec![
        ResponseRuleConfig::name("answer", "a", "b"),
        ResponseRuleConfig::name("nowhere", "a", "b"),
    ];
    match RewriteRule::build_table(&configs) {
        Err(DomainError::InvalidRewriteRuleAt { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected indexed error, got {:?}", other),
    }
}

#[test]
fn test_rule_display() {
    let rule = RewriteRule::ttl(SectionScope::All, 300).with_continuation(Continuation::Continue);
    assert_eq!(rule.to_string(), "all ttl 300 (continue)");
}
