//! The authoritative per-user cart.

use tracing::debug;

use crate::cart::storage::CartStorage;
use crate::cart::{CartLine, LineKey};
use crate::catalog::{GiftPackage, Product, SellerRef};
use crate::error::MarketError;
use crate::ids::{ProductId, SellerId, UserId};
use crate::money::Money;
use crate::variant::{self, VariantSelection};

/// In-memory cart with a durable persisted mirror.
///
/// The store is created per user at login via [`CartStore::init`], mutated
/// by the explicit operations below, and torn down at logout. Every
/// mutating operation writes the cart through to storage before returning;
/// if the write fails the in-memory change is rolled back, so memory and
/// durable state never diverge.
pub struct CartStore<S: CartStorage> {
    user_id: UserId,
    lines: Vec<CartLine>,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the cart for a user, rehydrating any persisted lines.
    pub fn init(user_id: UserId, storage: S) -> Result<Self, MarketError> {
        let lines = storage.load(&user_id)?.unwrap_or_default();
        debug!(user = %user_id, lines = lines.len(), "cart rehydrated");
        Ok(Self {
            user_id,
            lines,
            storage,
        })
    }

    /// The user this cart belongs to.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// The unit price is resolved from the product and selection first; a
    /// selection the product does not define is rejected with the cart
    /// untouched. An existing line with the same product id and the same
    /// full selection has its quantity bumped; anything else appends a new
    /// line. Returns the key of the affected line.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        seller: SellerRef,
        selection: Option<VariantSelection>,
    ) -> Result<LineKey, MarketError> {
        let selection = selection.unwrap_or_default();
        let resolved = variant::resolve(product, &selection)?;
        let key = LineKey::derive(&product.id, &selection);
        self.upsert(
            key,
            product.id.clone(),
            product.name.clone(),
            resolved.unit_price,
            quantity,
            selection,
            seller,
        )
    }

    /// Add a curated gift package as a single unit.
    ///
    /// Packages carry the synthetic gift-package seller identity and no
    /// variant selection; otherwise they follow ordinary line rules.
    pub fn add_package(
        &mut self,
        package: &GiftPackage,
        quantity: i64,
    ) -> Result<LineKey, MarketError> {
        let key = LineKey::derive(&package.id, &VariantSelection::new());
        self.upsert(
            key,
            package.id.clone(),
            package.name.clone(),
            package.price,
            quantity,
            VariantSelection::new(),
            GiftPackage::seller_ref(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn upsert(
        &mut self,
        key: LineKey,
        product_id: ProductId,
        name: String,
        unit_price: Money,
        quantity: i64,
        selection: VariantSelection,
        seller: SellerRef,
    ) -> Result<LineKey, MarketError> {
        if quantity <= 0 {
            return Err(MarketError::InvalidQuantity(quantity));
        }

        let previous = self.lines.clone();
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key == key) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(MarketError::Overflow)?;
        } else {
            self.lines.push(CartLine {
                key: key.clone(),
                product_id,
                name,
                unit_price,
                quantity,
                selection,
                seller,
            });
        }
        self.commit(previous)?;
        debug!(user = %self.user_id, line = %key, "cart line added");
        Ok(key)
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or less removes the line; a quantity below one is
    /// never stored. Returns whether a line was affected.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> Result<bool, MarketError> {
        if quantity <= 0 {
            return self.remove_item(key);
        }

        let previous = self.lines.clone();
        match self.lines.iter_mut().find(|l| &l.key == key) {
            Some(line) => {
                line.quantity = quantity.max(1);
                self.commit(previous)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line unconditionally. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, key: &LineKey) -> Result<bool, MarketError> {
        let previous = self.lines.clone();
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.key != key);
        if self.lines.len() == len_before {
            return Ok(false);
        }
        self.commit(previous)?;
        debug!(user = %self.user_id, line = %key, "cart line removed");
        Ok(true)
    }

    /// Total item count, the sum of quantities over all lines.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price, the sum of `unit_price * quantity` over all lines.
    ///
    /// Recomputed on every call; carts are small and recomputation keeps
    /// the total trivially consistent with the lines.
    pub fn total_price(&self) -> Result<Money, MarketError> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| {
            acc.try_add(line.subtotal()?).ok_or(MarketError::Overflow)
        })
    }

    /// Remove every line.
    pub fn clear(&mut self) -> Result<(), MarketError> {
        let previous = self.lines.clone();
        self.lines.clear();
        self.commit(previous)
    }

    /// Remove only the lines belonging to one seller, leaving the rest in
    /// their original order. Supports partial-success checkout.
    pub fn clear_seller(&mut self, seller_id: &SellerId) -> Result<(), MarketError> {
        let previous = self.lines.clone();
        self.lines.retain(|l| &l.seller.id != seller_id);
        if self.lines.len() == previous.len() {
            return Ok(());
        }
        self.commit(previous)?;
        debug!(user = %self.user_id, seller = %seller_id, "seller lines cleared");
        Ok(())
    }

    /// Drop the persisted cart on logout.
    pub fn teardown(self) -> Result<(), MarketError> {
        self.storage.delete(&self.user_id)
    }

    fn commit(&mut self, previous: Vec<CartLine>) -> Result<(), MarketError> {
        if let Err(e) = self.storage.save(&self.user_id, &self.lines) {
            self.lines = previous;
            return Err(e);
        }
        Ok(())
    }
}
