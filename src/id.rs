use gpui::SharedString;

/// Callsite-stable identity for components the caller did not name. Renders
/// from the same construction site agree across frames; different sites get
/// different ids, so sibling components never collide by accident.
#[track_caller]
pub fn stable_auto_id(kind: &str) -> SharedString {
    let caller = std::panic::Location::caller();
    let digest = fold_fnv1a(&[
        kind.as_bytes(),
        caller.file().as_bytes(),
        &caller.line().to_le_bytes(),
        &caller.column().to_le_bytes(),
    ]);
    SharedString::from(format!("{kind}-{digest:016x}"))
}

/// Identity for a nested slot of an identified component.
pub fn slot_id(parent: &SharedString, slot: &str) -> SharedString {
    SharedString::from(format!("{parent}/{slot}"))
}

fn fold_fnv1a(parts: &[&[u8]]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    parts
        .iter()
        .flat_map(|part| part.iter())
        .fold(OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn id_from_helper() -> SharedString {
        stable_auto_id("button")
    }

    #[test]
    fn same_callsite_produces_the_same_id() {
        let ids = (0..3).map(|_| id_from_helper()).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn different_callsites_produce_different_ids() {
        let first = id_from_helper();
        let second = stable_auto_id("button");
        assert_ne!(first, second);
    }

    #[test]
    fn slot_ids_stay_under_their_parent() {
        let parent = stable_auto_id("image");
        let slot = slot_id(&parent, "fade");
        assert!(slot.starts_with(&*parent));
        assert!(slot.ends_with("/fade"));
    }
}
