use std::path::{Path, PathBuf};

use android_layout_ids::inject::id_gen::IdGenerator;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const MAIN_LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:layout_width="match_parent">
    <TextView android:text="@string/hello" />
    <Button android:id="@+id/submit" android:text="Go" />
    <com.example.FancyView android:layout_height="wrap_content" />
</LinearLayout>
"#;

pub const OPTIONS_MENU: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<menu xmlns:android="http://schemas.android.com/apk/res/android">
    <item android:title="@string/settings" />
    <item android:id="@+id/about" android:title="@string/about" />
</menu>
"#;

/// Deterministic generator for assertions that depend on drawn numbers.
pub fn seeded_ids(seed: u64) -> IdGenerator<StdRng> {
    IdGenerator::with_rng(StdRng::seed_from_u64(seed))
}

pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Lay out a small Android project:
///
/// ```text
/// app/src/main/res/layout/main.xml
/// app/src/main/res/layout-land/main.xml
/// app/src/main/res/menu/options.xml
/// app/src/main/res/values/strings.xml     (not a view resource)
/// app/src/main/layout/stray.xml           (not under res/)
/// ```
pub fn android_project(root: &Path) {
    write_file(root, "app/src/main/res/layout/main.xml", MAIN_LAYOUT);
    write_file(root, "app/src/main/res/layout-land/main.xml", MAIN_LAYOUT);
    write_file(root, "app/src/main/res/menu/options.xml", OPTIONS_MENU);
    write_file(
        root,
        "app/src/main/res/values/strings.xml",
        "<resources><string name=\"hello\">Hi</string></resources>\n",
    );
    write_file(root, "app/src/main/layout/stray.xml", "<TextView/>\n");
}

pub fn res(root: &Path, relative: &str) -> PathBuf {
    root.join("app/src/main/res").join(relative)
}

/// Is `id` of the form `@+id/<tag>_<digits>`?
pub fn is_generated_id(id: &str, tag: &str) -> bool {
    let prefix = format!("@+id/{}_", tag);
    match id.strip_prefix(&prefix) {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
