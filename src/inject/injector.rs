use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::xml::XmlDocument;

use super::id_gen::IdGenerator;
use super::widgets::WidgetAllowList;

/// Literal attribute name that identifies a view.
pub const ID_ATTRIBUTE: &str = "android:id";

/// One identifier written into a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub tag: String,
    pub id: String,
}

/// Give every allow-listed element that lacks `android:id` a fresh one.
///
/// The allow-list is walked in order and, for each entry, the whole tree in
/// document order (root included). Elements that already carry the
/// attribute, even with an empty value, are left alone. Assignments are
/// returned in the order they were made.
pub fn inject<R: Rng>(
    doc: &mut XmlDocument,
    widgets: &WidgetAllowList,
    ids: &mut IdGenerator<R>,
) -> Vec<Assignment> {
    if ids.tracks_uniqueness() {
        doc.root.visit(&mut |el| {
            if let Some(existing) = el.attribute(ID_ATTRIBUTE) {
                ids.reserve(&existing);
            }
        });
    }

    let mut assignments = Vec::new();
    for widget in widgets.iter() {
        doc.root.visit_mut(&mut |el| {
            if el.name != widget || el.has_attribute(ID_ATTRIBUTE) {
                return;
            }
            let id = ids.next_id(&el.name);
            el.set_attribute(ID_ATTRIBUTE, &id);
            assignments.push(Assignment {
                tag: el.name.clone(),
                id,
            });
        });
    }
    assignments
}

/// True when no allow-listed element is missing an id.
pub fn is_fully_tagged(doc: &XmlDocument, widgets: &WidgetAllowList) -> bool {
    let mut missing = false;
    doc.root.visit(&mut |el| {
        if widgets.contains(&el.name) && !el.has_attribute(ID_ATTRIBUTE) {
            missing = true;
        }
    });
    !missing
}
