//! In-memory port implementations shared by the service tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::Decimal;
use servery_domain::error::ServeryError;
use servery_domain::id::{MenuGroupId, MenuId, OrderId, OrderTableId, ProductId, TableGroupId};
use servery_domain::menu::Menu;
use servery_domain::menu_group::MenuGroup;
use servery_domain::money::Money;
use servery_domain::order::Order;
use servery_domain::order_table::OrderTable;
use servery_domain::product::Product;
use servery_domain::table_group::TableGroup;

use crate::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};

pub(crate) fn money(value: i64) -> Money {
    Money::new(Decimal::from(value)).unwrap()
}

#[derive(Default)]
pub(crate) struct State {
    pub products: HashMap<ProductId, Product>,
    pub menu_groups: HashMap<MenuGroupId, MenuGroup>,
    pub menus: HashMap<MenuId, Menu>,
    pub tables: HashMap<OrderTableId, OrderTable>,
    pub table_groups: HashMap<TableGroupId, TableGroup>,
    pub orders: Vec<Order>,
}

/// One shared store that implements every storage port and the catalog.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    inner: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn state(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap()
    }

    pub fn seed_product(&self, name: &str, price: i64) -> Product {
        let product = Product::builder()
            .name(name)
            .price(money(price))
            .build()
            .unwrap();
        self.state().products.insert(product.id, product.clone());
        product
    }

    pub fn seed_menu_group(&self, name: &str) -> MenuGroup {
        let group = MenuGroup::new(name).unwrap();
        self.state().menu_groups.insert(group.id, group.clone());
        group
    }

    pub fn seed_menu(&self) -> Menu {
        let group = self.seed_menu_group("Set meals");
        let menu = Menu::builder(group.id)
            .name("Chicken set")
            .price(Money::ZERO)
            .build()
            .unwrap();
        self.state().menus.insert(menu.id, menu.clone());
        menu
    }

    pub fn seed_table(&self, number_of_guests: i64, empty: bool) -> OrderTable {
        let table = OrderTable::new(number_of_guests, empty).unwrap();
        self.state().tables.insert(table.id, table.clone());
        table
    }

    pub fn seed_order(&self, order: Order) -> Order {
        self.state().orders.push(order.clone());
        order
    }

    pub fn table(&self, id: OrderTableId) -> OrderTable {
        self.state().tables[&id].clone()
    }

    pub fn order(&self, id: OrderId) -> Order {
        self.state()
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .unwrap()
    }
}

impl ProductRepository for InMemoryStore {
    fn create(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, ServeryError>> + Send {
        self.state().products.insert(product.id, product.clone());
        async { Ok(product) }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ServeryError>> + Send {
        let result = self.state().products.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ServeryError>> + Send {
        let result: Vec<Product> = self.state().products.values().cloned().collect();
        async { Ok(result) }
    }
}

impl MenuGroupRepository for InMemoryStore {
    fn create(
        &self,
        menu_group: MenuGroup,
    ) -> impl Future<Output = Result<MenuGroup, ServeryError>> + Send {
        self.state()
            .menu_groups
            .insert(menu_group.id, menu_group.clone());
        async { Ok(menu_group) }
    }

    fn get_by_id(
        &self,
        id: MenuGroupId,
    ) -> impl Future<Output = Result<Option<MenuGroup>, ServeryError>> + Send {
        let result = self.state().menu_groups.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuGroup>, ServeryError>> + Send {
        let result: Vec<MenuGroup> = self.state().menu_groups.values().cloned().collect();
        async { Ok(result) }
    }
}

impl MenuRepository for InMemoryStore {
    fn create(&self, menu: Menu) -> impl Future<Output = Result<Menu, ServeryError>> + Send {
        self.state().menus.insert(menu.id, menu.clone());
        async { Ok(menu) }
    }

    fn get_by_id(
        &self,
        id: MenuId,
    ) -> impl Future<Output = Result<Option<Menu>, ServeryError>> + Send {
        let result = self.state().menus.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Menu>, ServeryError>> + Send {
        let result: Vec<Menu> = self.state().menus.values().cloned().collect();
        async { Ok(result) }
    }
}

impl OrderTableRepository for InMemoryStore {
    fn create(
        &self,
        table: OrderTable,
    ) -> impl Future<Output = Result<OrderTable, ServeryError>> + Send {
        self.state().tables.insert(table.id, table.clone());
        async { Ok(table) }
    }

    fn get_by_id(
        &self,
        id: OrderTableId,
    ) -> impl Future<Output = Result<Option<OrderTable>, ServeryError>> + Send {
        let result = self.state().tables.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let result: Vec<OrderTable> = self.state().tables.values().cloned().collect();
        async { Ok(result) }
    }

    fn find_by_ids(
        &self,
        ids: &[OrderTableId],
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let result: Vec<OrderTable> = self
            .state()
            .tables
            .values()
            .filter(|table| ids.contains(&table.id))
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn find_by_table_group_id(
        &self,
        table_group_id: TableGroupId,
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let result: Vec<OrderTable> = self
            .state()
            .tables
            .values()
            .filter(|table| table.table_group_id == Some(table_group_id))
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        table: OrderTable,
    ) -> impl Future<Output = Result<OrderTable, ServeryError>> + Send {
        self.state().tables.insert(table.id, table.clone());
        async { Ok(table) }
    }

    fn update_all(
        &self,
        tables: Vec<OrderTable>,
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let mut state = self.state();
        for table in &tables {
            state.tables.insert(table.id, table.clone());
        }
        drop(state);
        async { Ok(tables) }
    }
}

impl TableGroupRepository for InMemoryStore {
    fn create(
        &self,
        table_group: TableGroup,
        members: Vec<OrderTable>,
    ) -> impl Future<Output = Result<TableGroup, ServeryError>> + Send {
        let mut state = self.state();
        for table in members {
            state.tables.insert(table.id, table);
        }
        state
            .table_groups
            .insert(table_group.id, table_group.clone());
        drop(state);
        async { Ok(table_group) }
    }

    fn get_by_id(
        &self,
        id: TableGroupId,
    ) -> impl Future<Output = Result<Option<TableGroup>, ServeryError>> + Send {
        let result = self.state().table_groups.get(&id).cloned();
        async { Ok(result) }
    }
}

impl OrderRepository for InMemoryStore {
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, ServeryError>> + Send {
        self.state().orders.push(order.clone());
        async { Ok(order) }
    }

    fn get_by_id(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<Option<Order>, ServeryError>> + Send {
        let result = self
            .state()
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Order>, ServeryError>> + Send {
        let result = self.state().orders.clone();
        async { Ok(result) }
    }

    fn find_by_order_table_id(
        &self,
        order_table_id: OrderTableId,
    ) -> impl Future<Output = Result<Vec<Order>, ServeryError>> + Send {
        let result: Vec<Order> = self
            .state()
            .orders
            .iter()
            .filter(|order| order.order_table_id == order_table_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(&self, order: Order) -> impl Future<Output = Result<Order, ServeryError>> + Send {
        let mut state = self.state();
        if let Some(stored) = state.orders.iter_mut().find(|o| o.id == order.id) {
            *stored = order.clone();
        }
        drop(state);
        async { Ok(order) }
    }
}

impl Catalog for InMemoryStore {
    fn exists_menu_group(
        &self,
        id: MenuGroupId,
    ) -> impl Future<Output = Result<bool, ServeryError>> + Send {
        let result = self.state().menu_groups.contains_key(&id);
        async move { Ok(result) }
    }

    fn exists_menu(&self, id: MenuId) -> impl Future<Output = Result<bool, ServeryError>> + Send {
        let result = self.state().menus.contains_key(&id);
        async move { Ok(result) }
    }

    fn resolve_product_price(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Money>, ServeryError>> + Send {
        let result = self.state().products.get(&id).map(|product| product.price);
        async move { Ok(result) }
    }
}
