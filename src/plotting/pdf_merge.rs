//! Concatenate PDF documents page by page

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::common::{ToolError, ToolResult};

/// Merge `inputs` into `output`, keeping input order and page order.
pub fn merge_pdfs<P: AsRef<Path>, Q: AsRef<Path>>(inputs: &[P], output: Q) -> ToolResult<()> {
    if inputs.is_empty() {
        return Err(ToolError::Merge("no input documents".to_string()));
    }

    let mut max_id = 1;
    let mut pages: Vec<(ObjectId, Dictionary)> = Vec::new();
    let mut objects = std::collections::BTreeMap::new();

    for input in inputs {
        let input = input.as_ref();
        let mut doc = Document::load(input)
            .map_err(|e| ToolError::Merge(format!("{}: {}", input.display(), e)))?;
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        // get_pages is keyed by page number, so this is page order
        for object_id in doc.get_pages().into_values() {
            let page = doc.get_object(object_id)?.as_dict()?.clone();
            pages.push((object_id, page));
        }
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    let mut catalog: Option<(ObjectId, Dictionary)> = None;
    let mut page_tree: Option<(ObjectId, Dictionary)> = None;

    for (object_id, object) in objects {
        let type_name = object.type_name().unwrap_or("").to_string();
        match type_name.as_str() {
            "Catalog" => {
                if catalog.is_none() {
                    catalog = Some((object_id, object.as_dict()?.clone()));
                }
            }
            "Pages" => {
                let dictionary = object.as_dict()?.clone();
                page_tree = Some(match page_tree {
                    Some((id, mut existing)) => {
                        existing.extend(&dictionary);
                        (id, existing)
                    }
                    None => (object_id, dictionary),
                });
            }
            "Page" | "Outlines" | "Outline" => {}
            _ => {
                merged.objects.insert(object_id, object);
            }
        }
    }

    let (catalog_id, mut catalog) =
        catalog.ok_or_else(|| ToolError::Merge("catalog not found".to_string()))?;
    let (pages_id, mut page_tree) =
        page_tree.ok_or_else(|| ToolError::Merge("page tree not found".to_string()))?;

    let kids: Vec<Object> = pages.iter().map(|(id, _)| Object::Reference(*id)).collect();
    let page_count = pages.len() as u32;
    for (object_id, mut page) in pages {
        page.set("Parent", pages_id);
        merged.objects.insert(object_id, Object::Dictionary(page));
    }

    page_tree.set("Count", page_count);
    page_tree.set("Kids", kids);
    merged.objects.insert(pages_id, Object::Dictionary(page_tree));

    catalog.set("Pages", pages_id);
    catalog.remove(b"Outlines");
    merged.objects.insert(catalog_id, Object::Dictionary(catalog));

    merged.trailer.set("Root", catalog_id);
    merged.max_id = merged.objects.len() as u32;
    merged.renumber_objects();
    merged.adjust_zero_pages();
    merged.compress();

    let output = output.as_ref();
    merged.save(output)?;
    log::debug!("Merged {} pages into {}", page_count, output.display());
    Ok(())
}

/// Number of pages in the document at `path`
pub fn page_count<P: AsRef<Path>>(path: P) -> ToolResult<usize> {
    Ok(Document::load(path)?.get_pages().len())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    /// Write a one page PDF whose page dictionary carries `Label`
    pub(crate) fn write_labeled_page(path: &Path, label: &str) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(label)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Label" => Object::Name(label.as_bytes().to_vec()),
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    /// Labels of every page in page order
    pub(crate) fn page_labels(path: &Path) -> Vec<String> {
        let doc = Document::load(path).unwrap();
        doc.get_pages()
            .into_values()
            .map(|id| {
                let page = doc.get_object(id).unwrap().as_dict().unwrap();
                let name = page.get(b"Label").unwrap().as_name().unwrap();
                String::from_utf8(name.to_vec()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_merge_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let names = ["c", "a", "b"];
        let inputs: Vec<_> = names.iter().map(|n| dir.path().join(format!("{}.pdf", n))).collect();
        for (path, name) in inputs.iter().zip(names.iter()) {
            write_labeled_page(path, name);
        }

        let output = dir.path().join("merged.pdf");
        merge_pdfs(&inputs, &output).unwrap();

        assert_eq!(page_count(&output).unwrap(), 3);
        assert_eq!(page_labels(&output), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_merge_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("merged.pdf");
        let err = merge_pdfs(&[dir.path().join("missing.pdf")], &output).unwrap_err();
        assert!(matches!(err, ToolError::Merge(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_merge_requires_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let inputs: [&Path; 0] = [];
        assert!(merge_pdfs(&inputs, dir.path().join("merged.pdf")).is_err());
    }
}
