// ============================================================================
// Widget allow-list
// ============================================================================

/// Tag names eligible for automatic `android:id` assignment.
///
/// Matching is literal and case-sensitive. `menu/item` is kept from the
/// historical list even though no parsed element can carry that name;
/// `<item>` elements are matched by the plain `item` entry.
pub const STANDARD_WIDGETS: &[&str] = &[
    "TextView",
    "ListView",
    "ImageView",
    "ImageButton",
    "item",
    "ToggleButton",
    "CheckBox",
    "RadioButton",
    "CheckedTextView",
    "Spinner",
    "ProgressBar",
    "SeekBar",
    "QuickContactBadge",
    "RadioGroup",
    "RatingBar",
    "EditText",
    "TableRow",
    "ExpandableListView",
    "GridView",
    "ScrollView",
    "HorizontalScrollView",
    "SearchView",
    "SlidingDrawer",
    "LinearLayout",
    "FrameLayout",
    "TabHost",
    "TabWidget",
    "WebView",
    "Gallery",
    "MediaController",
    "VideoView",
    "TimePicker",
    "DatePicker",
    "CalendarView",
    "Chronometer",
    "AnalogClock",
    "DigitalClock",
    "ImageSwitcher",
    "AdapterViewFlipper",
    "StackView",
    "TextSwitcher",
    "ViewAnimator",
    "ViewFlipper",
    "ViewSwitcher",
    "View",
    "ViewStub",
    "menu/item",
    "Button",
];

/// Ordered set of distinct widget tag names.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetAllowList {
    names: Vec<String>,
}

impl Default for WidgetAllowList {
    fn default() -> Self {
        Self::standard()
    }
}

impl WidgetAllowList {
    pub fn standard() -> Self {
        Self {
            names: STANDARD_WIDGETS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Standard list with extra names appended. Duplicates and blank names
    /// are dropped.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::standard();
        for name in extra {
            let name = name.as_ref().trim();
            if !name.is_empty() && !list.contains(name) {
                list.names.push(name.to_string());
            }
        }
        list
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.names.iter().any(|n| n == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
