use super::item::{Candidate, CompletionItem};

/// Sort each provider group by name, arity and kind, drop exact
/// duplicates, then concatenate the groups in the order given.
pub(crate) fn rank(groups: Vec<Vec<Candidate>>) -> Vec<CompletionItem> {
    let mut out = Vec::with_capacity(groups.iter().map(Vec::len).sum());
    for mut group in groups {
        group.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then(a.arity.cmp(&b.arity))
                .then(a.kind.cmp(&b.kind))
        });
        group.dedup_by(|later, kept| later.name == kept.name && later.arity == kept.arity && later.kind == kept.kind);
        out.extend(group.into_iter().map(Candidate::into_item));
    }
    out
}
