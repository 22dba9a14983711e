use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::{Context as _, Result};
use rust_embed::RustEmbed;

const BUILTIN_PACK: &str = "builtin";

/// One named pack of SVG files, indexed by icon name.
///
/// Names from the `outline/` directory win when a name exists in both
/// variants; the `-outline` and `-filled` suffixed aliases stay available so
/// callers can ask for a variant explicitly.
#[derive(Clone, Debug, Default)]
struct PackIndex {
    names: BTreeMap<String, PathBuf>,
}

impl PackIndex {
    fn insert(&mut self, name: String, path: PathBuf) {
        self.names.entry(name).or_insert(path);
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.names.get(name).cloned()
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

#[derive(Clone, Debug)]
struct RegistryInner {
    default_pack: String,
    packs: BTreeMap<String, PackIndex>,
}

/// Resolves icon names to extracted SVG paths on disk.
///
/// The built-in pack ships inside the binary and is extracted once per crate
/// version into the system temp directory; subsequent processes reuse the
/// extracted files. Additional packs can be registered from any
/// [`RustEmbed`] source and addressed with a `pack:name` prefix.
#[derive(Clone, Debug)]
pub struct IconRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        static DEFAULT_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let mut packs = BTreeMap::new();
        match extract_embedded_pack::<EmbeddedBuiltin>(BUILTIN_PACK) {
            Ok(root) => match load_pack_from_root(&root) {
                Ok(pack) => {
                    packs.insert(BUILTIN_PACK.to_string(), pack);
                }
                Err(error) => log::warn!("failed to index built-in icon pack: {error:#}"),
            },
            Err(error) => log::warn!("failed to extract built-in icon pack: {error:#}"),
        }

        Self {
            inner: Arc::new(RegistryInner {
                default_pack: BUILTIN_PACK.to_string(),
                packs,
            }),
        }
    }

    /// Changes which pack unprefixed names resolve against.
    pub fn with_default_pack(mut self, pack: impl Into<String>) -> Self {
        let mut next = (*self.inner).clone();
        next.default_pack = pack.into();
        self.inner = Arc::new(next);
        self
    }

    /// Registers an additional embedded pack under `name`.
    ///
    /// The pack's files are laid out like the built-in one, with `outline/`
    /// and `filled/` directories of `.svg` files.
    pub fn register_embedded_pack<T: RustEmbed>(mut self, name: impl Into<String>) -> Self {
        let mut next = (*self.inner).clone();
        let pack_name = name.into();
        let extract_key = format!("extra-{pack_name}");
        match extract_embedded_pack::<T>(&extract_key).and_then(|root| load_pack_from_root(&root))
        {
            Ok(pack) => {
                next.packs.insert(pack_name, pack);
            }
            Err(error) => log::warn!("failed to register icon pack {pack_name:?}: {error:#}"),
        }
        self.inner = Arc::new(next);
        self
    }

    /// Resolves `name` (optionally `pack:name`) to an SVG path on disk.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let (pack_name, icon_name) = split_namespace(name, &self.inner.default_pack);
        self.inner.packs.get(pack_name)?.resolve(icon_name)
    }

    pub fn count(&self, pack: &str) -> usize {
        self.inner
            .packs
            .get(pack)
            .map(PackIndex::len)
            .unwrap_or_default()
    }

    pub fn packs(&self) -> Vec<String> {
        self.inner.packs.keys().cloned().collect()
    }
}

fn split_namespace<'a>(value: &'a str, default_pack: &'a str) -> (&'a str, &'a str) {
    if let Some((pack, icon)) = value.split_once(':') {
        if !pack.is_empty() && !icon.is_empty() {
            return (pack, icon);
        }
    }
    (default_pack, value)
}

fn load_pack_from_root(root: &Path) -> Result<PackIndex> {
    let mut pack = PackIndex::default();
    for (variant, suffix) in [("outline", "-outline"), ("filled", "-filled")] {
        let variant_root = root.join(variant);
        if !variant_root.exists() {
            continue;
        }
        for icon_name in read_icon_names(&variant_root)? {
            let path = variant_root.join(format!("{icon_name}.svg"));
            pack.insert(icon_name.clone(), path.clone());
            if !icon_name.ends_with(suffix) {
                pack.insert(format!("{icon_name}{suffix}"), path);
            }
        }
    }
    Ok(pack)
}

fn read_icon_names(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries =
        fs::read_dir(root).with_context(|| format!("reading icon directory {root:?}"))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading icon directory {root:?}"))?
            .path();
        if !path.is_file() {
            continue;
        }

        let is_svg = path
            .extension()
            .and_then(|value| value.to_str())
            .map(|value| value.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if !is_svg {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|value| value.to_str()) {
            names.push(stem.to_string());
        }
    }
    Ok(names)
}

fn extract_embedded_pack<T: RustEmbed>(folder_name: &str) -> Result<PathBuf> {
    let root = std::env::temp_dir()
        .join("mellowui-icons")
        .join(env!("CARGO_PKG_VERSION"))
        .join(folder_name);
    let marker = root.join(".extract-ready");

    if marker.exists() && embedded_pack_is_complete::<T>(&root) {
        return Ok(root);
    }

    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).with_context(|| format!("creating icon cache at {root:?}"))?;

    for relative in T::iter() {
        let relative = relative.as_ref();
        let Some(safe_relative) = sanitize_relative_path(relative) else {
            continue;
        };
        let Some(content) = T::get(relative) else {
            continue;
        };

        let destination = root.join(safe_relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating icon directory {parent:?}"))?;
        }
        fs::write(&destination, content.data.as_ref())
            .with_context(|| format!("writing icon file {destination:?}"))?;
    }

    fs::write(&marker, b"ok").with_context(|| format!("writing marker {marker:?}"))?;
    Ok(root)
}

fn embedded_pack_is_complete<T: RustEmbed>(root: &Path) -> bool {
    T::iter().all(|relative| {
        let relative = relative.as_ref();
        let Some(safe_relative) = sanitize_relative_path(relative) else {
            return false;
        };
        root.join(safe_relative).is_file()
    })
}

// Embedded archives are trusted, but the extraction root lives in a shared
// temp directory, so no path may escape it.
fn sanitize_relative_path(input: &str) -> Option<PathBuf> {
    let mut output = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::Normal(value) => output.push(value),
            _ => return None,
        }
    }
    Some(output)
}

#[derive(RustEmbed)]
#[folder = "assets/icons/builtin"]
struct EmbeddedBuiltin;
