//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//!
//! # Catalog
//! GET  /products                        - Filtered listing (?category&subcategory&colors&sizes&max_price&sort)
//! GET  /products/{id}                   - Product detail with related products
//! GET  /shop/{category}                 - Listing scoped to a category slug
//! GET  /shop/{category}/{subcategory}   - Listing scoped to a subcategory slug
//! GET  /categories                      - Category tree
//!
//! # Cart
//! GET  /cart                            - Items and order summary
//! GET  /cart/count                      - Item count badge
//! POST /cart/add                        - Add a product selection
//! POST /cart/update                     - Set a line quantity (clamped to 1)
//! POST /cart/remove                     - Remove a line
//! POST /cart/clear                      - Empty the cart
//!
//! # Wishlist
//! GET  /wishlist                        - Saved items
//! POST /wishlist/toggle                 - Save or forget a product
//! POST /wishlist/remove                 - Forget a product
//!
//! # Checkout
//! GET  /checkout                        - Prefilled form and cart
//! POST /checkout                        - Place the order
//!
//! # Auth
//! POST /auth/login                      - Sign in
//! POST /auth/register                   - Register and sign in
//! POST /auth/logout                     - Sign out
//!
//! # Account (requires customer)
//! GET  /account                         - Profile, orders, wishlist
//! GET  /account/orders                  - Order history
//!
//! # Admin (requires admin session)
//! POST   /admin/login                   - Admin sign in
//! POST   /admin/logout                  - Admin sign out
//! POST   /admin/products                - Create product
//! PATCH  /admin/products/{id}           - Update product
//! DELETE /admin/products/{id}           - Delete product
//! POST   /admin/categories              - Add category
//! DELETE /admin/categories/{name}       - Delete category
//! POST   /admin/categories/{name}/subcategories        - Add subcategory
//! DELETE /admin/categories/{name}/subcategories/{sub}  - Delete subcategory
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/{category}", get(products::shop_category))
        .route("/{category}/{subcategory}", get(products::shop_subcategory))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/toggle", post(wishlist::toggle))
        .route("/remove", post(wishlist::remove))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route("/orders", get(account::orders))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/products", post(admin::create_product))
        .route(
            "/products/{id}",
            patch(admin::update_product).delete(admin::delete_product),
        )
        .route("/categories", post(admin::add_category))
        .route("/categories/{name}", delete(admin::delete_category))
        .route(
            "/categories/{name}/subcategories",
            post(admin::add_subcategory),
        )
        .route(
            "/categories/{name}/subcategories/{subcategory}",
            delete(admin::delete_subcategory),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/shop", shop_routes())
        .route("/categories", get(products::categories))
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/checkout", get(checkout::show).post(checkout::place))
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .nest("/admin", admin_routes())
}
