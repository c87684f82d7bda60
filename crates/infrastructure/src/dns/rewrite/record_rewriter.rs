use super::EmbeddedTarget;
use ferrous_rewrite_domain::{FieldKind, RecordSection, RewriteRule};
use hickory_proto::rr::{Name, Record};
use tracing::{debug, warn};

/// Applies response rules to one record at a time.
///
/// Owner name, TTL and embedded target are each worked on a copy and only
/// written back when at least one rule changed them.
pub struct RecordRewriter;

impl RecordRewriter {
    /// Rewrites `record` in place. Returns `true` if any field changed.
    pub fn rewrite(record: &mut Record, section: RecordSection, rules: &[RewriteRule]) -> bool {
        let mut owner = NameField::new(record.name());
        let mut target = record.data().embedded_target().map(NameField::new);
        let mut ttl = TtlField::new(record.ttl());

        for rule in rules.iter().filter(|rule| rule.applies_to(section)) {
            match rule.field {
                FieldKind::Name => {
                    owner.apply(rule);
                    if let Some(target) = target.as_mut() {
                        target.apply(rule);
                    }
                }
                FieldKind::Ttl => ttl.apply(rule),
            }
        }

        let mut changed = false;

        if let Some(name) = owner.into_rewritten() {
            debug!(
                section = %section,
                from = %record.name(),
                to = %name,
                "Rewriting record owner name"
            );
            record.set_name(name);
            changed = true;
        }

        if let Some(value) = ttl.into_rewritten() {
            debug!(section = %section, from = record.ttl(), to = value, "Rewriting record TTL");
            record.set_ttl(value);
            changed = true;
        }

        if let Some(name) = target.and_then(NameField::into_rewritten) {
            debug!(section = %section, to = %name, "Rewriting embedded target name");
            changed |= record.data_mut().set_embedded_target(name);
        }

        changed
    }
}

struct NameField {
    value: String,
    fqdn: bool,
    dirty: bool,
    stopped: bool,
}

impl NameField {
    fn new(name: &Name) -> Self {
        Self {
            value: name.to_ascii(),
            fqdn: name.is_fqdn(),
            dirty: false,
            stopped: false,
        }
    }

    fn apply(&mut self, rule: &RewriteRule) {
        if self.stopped {
            return;
        }
        if let Some(rewritten) = rule.rewrite_name(&self.value) {
            self.value = rewritten;
            self.dirty = true;
            self.stopped = rule.continuation.is_stop();
        }
    }

    /// Parsed result, or `None` when untouched or not a valid name.
    fn into_rewritten(mut self) -> Option<Name> {
        if !self.dirty {
            return None;
        }
        if self.fqdn && !self.value.ends_with('.') {
            self.value.push('.');
        }
        match Name::from_ascii(&self.value) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!(name = %self.value, error = %e, "Rewritten name is not a valid DNS name; keeping original");
                None
            }
        }
    }
}

struct TtlField {
    value: u32,
    dirty: bool,
    stopped: bool,
}

impl TtlField {
    fn new(value: u32) -> Self {
        Self {
            value,
            dirty: false,
            stopped: false,
        }
    }

    fn apply(&mut self, rule: &RewriteRule) {
        if self.stopped {
            return;
        }
        self.value = rule.ttl;
        self.dirty = true;
        self.stopped = rule.continuation.is_stop();
    }

    fn into_rewritten(self) -> Option<u32> {
        self.dirty.then_some(self.value)
    }
}
