use std::sync::Arc;

pub const ROOT_ZONE: &str = ".";

/// Returns `name` with a trailing dot, the way zone names are keyed
/// everywhere in the crate.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Root-to-leaf sequence of zones a delegation walk passes through.
///
/// `www.example.com` becomes `[".", "com.", "example.com.", "www.example.com."]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneChain {
    zones: Vec<Arc<str>>,
}

impl ZoneChain {
    pub fn build(name: &str) -> Self {
        let labels: Vec<&str> = name.split('.').filter(|l| !l.is_empty()).collect();

        let mut zones: Vec<Arc<str>> = Vec::with_capacity(labels.len() + 1);
        zones.push(Arc::from(ROOT_ZONE));

        for start in (0..labels.len()).rev() {
            let suffix = labels[start..].join(".");
            zones.push(Arc::from(fqdn(&suffix)));
        }

        Self { zones }
    }

    pub fn zones(&self) -> &[Arc<str>] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Always false: a chain holds at least the root.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// The fully-qualified input name (the root for `"."`).
    pub fn target(&self) -> &Arc<str> {
        &self.zones[self.zones.len() - 1]
    }

    /// Consecutive `(parent, child)` pairs, root first.
    pub fn hops(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<str>)> {
        self.zones.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
