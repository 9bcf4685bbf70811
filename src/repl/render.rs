use std::fmt::Write;

use crate::catalog::{CatalogSnapshot, Product};

/// Render the catalog as plain text, one block per product.
pub fn render_catalog(snapshot: &CatalogSnapshot) -> String {
    if snapshot.products.is_empty() {
        return "No products.".to_string();
    }

    let mut out = String::new();
    for product in &snapshot.products {
        render_into(&mut out, product, snapshot);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Render a single product, showing draft values if it is being edited.
pub fn render_product(product: &Product, snapshot: &CatalogSnapshot) -> String {
    let mut out = String::new();
    render_into(&mut out, product, snapshot);
    out.truncate(out.trim_end().len());
    out
}

fn render_into(out: &mut String, product: &Product, snapshot: &CatalogSnapshot) {
    let session = snapshot
        .editing
        .as_ref()
        .filter(|session| session.id() == product.id);

    let _ = writeln!(out, "Product #{}", product.id);
    match session {
        Some(session) => {
            let draft = session.draft();
            let _ = writeln!(out, "  [editing]");
            let _ = writeln!(out, "  Name: {}", draft.title);
            let _ = writeln!(out, "  {}", draft.description);
            if let Some(url) = &draft.image_url {
                let _ = writeln!(out, "  Image: {}", url);
            }
        }
        None => {
            let _ = writeln!(out, "  Name: {}", product.title);
            let _ = writeln!(out, "  {}", product.description);
            if let Some(url) = &product.image_url {
                let _ = writeln!(out, "  Image: {}", url);
            }
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, ProductId};
    use crate::form::DraftField;

    fn store() -> CatalogStore {
        let mut store = CatalogStore::default();
        store.seed(vec![
            Product::new(ProductId(1), "A", "da"),
            Product::new(ProductId(2), "B", "db").with_image_url("https://img/b.png"),
        ]);
        store
    }

    #[test]
    fn renders_every_product_in_order() {
        let text = render_catalog(&store().snapshot());
        assert_eq!(
            text,
            "Product #1\n  Name: A\n  da\n\nProduct #2\n  Name: B\n  db\n  Image: https://img/b.png"
        );
    }

    #[test]
    fn editing_product_shows_draft() {
        let mut store = store();
        store.begin_edit(ProductId(1));
        store.set_edit_field(DraftField::Title, "X");
        let snapshot = store.snapshot();
        let text = render_product(&snapshot.products[0], &snapshot);
        assert!(text.contains("[editing]"));
        assert!(text.contains("Name: X"));
    }

    #[test]
    fn empty_catalog() {
        assert_eq!(render_catalog(&CatalogSnapshot::default()), "No products.");
    }
}
