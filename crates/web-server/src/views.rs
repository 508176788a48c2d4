//! HTML rendering of the catalog page.

use core_types::Product;

/// View model for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    /// Rendered in the order given, which is ascending id.
    pub products: Vec<Product>,
    /// True only when a store is configured and the read succeeded.
    pub store_connected: bool,
}

impl CatalogPage {
    pub fn new(products: Vec<Product>, store_connected: bool) -> Self {
        Self { products, store_connected }
    }

    /// The page shown when the store is absent or the read failed.
    pub fn not_connected() -> Self {
        Self::new(Vec::new(), false)
    }

    pub fn render(&self) -> String {
        let (db_dot, db_label) = if self.store_connected {
            ("green", "Connected")
        } else {
            ("yellow", "Not Connected")
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QuickCart - Sample Store</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <h1>QuickCart</h1>
    </header>
    <main>
        <div class="status">
            <span class="status-item">
                <span class="status-dot green"></span>
                Server: Running
            </span>
            <span class="status-item">
                <span class="status-dot {db_dot}"></span>
                Database: {db_label}
            </span>
        </div>

        <h2>Products</h2>
{products}
    </main>
    <footer>
        <p>QuickCart Sample Application</p>
    </footer>
</body>
</html>"#,
            products = self.render_products(),
        )
    }

    fn render_products(&self) -> String {
        if self.products.is_empty() {
            return r#"        <div class="no-products">
            <p>No products available. Connect to database to see products.</p>
        </div>"#
                .to_string();
        }

        let mut out = String::from("        <div class=\"products\">\n");
        for product in &self.products {
            let card = format!(
                r#"            <div class="product" data-id="{id}">
                <h3>{name}</h3>
                <div class="price">${price:.2}</div>
                <div class="stock">Stock: {stock} units</div>
            </div>
"#,
                id = product.id,
                name = html_escape(&product.name),
                price = product.price,
                stock = product.stock,
            );
            out.push_str(&card);
        }
        out.push_str("        </div>");
        out
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const STYLE: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f5f5f5;
            min-height: 100vh;
        }
        header {
            background: #2563eb;
            color: white;
            padding: 1rem 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        header h1 { font-size: 1.5rem; }
        main { max-width: 1200px; margin: 0 auto; padding: 2rem; }
        .status {
            background: white;
            padding: 1rem;
            border-radius: 8px;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }
        .status-item { display: inline-block; margin-right: 2rem; font-size: 0.9rem; }
        .status-dot {
            display: inline-block;
            width: 8px;
            height: 8px;
            border-radius: 50%;
            margin-right: 0.5rem;
        }
        .status-dot.green { background: #22c55e; }
        .status-dot.yellow { background: #eab308; }
        h2 { margin-bottom: 1rem; color: #333; }
        .products {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
            gap: 1.5rem;
        }
        .product {
            background: white;
            border-radius: 8px;
            padding: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }
        .product h3 { color: #333; margin-bottom: 0.5rem; }
        .product .price { font-size: 1.25rem; font-weight: 600; color: #2563eb; margin-bottom: 0.5rem; }
        .product .stock { font-size: 0.85rem; color: #666; }
        .no-products { text-align: center; padding: 3rem; color: #666; }
        footer { text-align: center; padding: 2rem; color: #666; font-size: 0.9rem; }
    "#;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i32, name: &str) -> Product {
        Product { id, name: name.to_string(), price: dec!(79.9), stock: 3 }
    }

    #[test]
    fn empty_page_shows_placeholder_and_not_connected() {
        let html = CatalogPage::not_connected().render();
        assert!(html.contains("No products available"));
        assert!(html.contains("Database: Not Connected"));
        assert!(html.contains("status-dot yellow"));
    }

    #[test]
    fn connected_but_empty_still_shows_placeholder() {
        let html = CatalogPage::new(Vec::new(), true).render();
        assert!(html.contains("No products available"));
        assert!(html.contains("Database: Connected"));
    }

    #[test]
    fn products_render_in_the_given_order_with_two_decimal_prices() {
        let html = CatalogPage::new(vec![product(1, "Keyboard"), product(2, "Mouse")], true).render();
        let keyboard = html.find("Keyboard").unwrap();
        let mouse = html.find("Mouse").unwrap();
        assert!(keyboard < mouse);
        assert!(html.contains("$79.90"));
        assert!(html.contains("Stock: 3 units"));
        assert!(!html.contains("No products available"));
    }

    #[test]
    fn product_names_are_escaped() {
        let html = CatalogPage::new(vec![product(1, "<script>")], true).render();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<h3><script>"));
    }
}
