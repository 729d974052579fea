//! Order id allocation
//!
//! The counter lives inside [`OrderCollection`], so the id advance and the
//! appended order reach the medium in the same `save`.

use shared::models::OrderCollection;

/// 取出下一个订单 ID 并递增计数器
///
/// If the stored counter is not ahead of every existing id (hand-edited or
/// damaged file), it is first raised to `max id + 1` so ids stay unique.
pub fn allocate_id(collection: &mut OrderCollection) -> i64 {
    if let Some(max_id) = collection.max_id()
        && collection.next_id <= max_id
    {
        tracing::warn!(
            next_id = collection.next_id,
            max_id,
            "Order counter behind stored ids, repairing"
        );
        collection.next_id = max_id + 1;
    }

    let id = collection.next_id;
    collection.next_id += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Order;

    fn order_with_id(id: i64) -> Order {
        Order {
            id,
            customer: "Ana".to_string(),
            product: "Pizza".to_string(),
            amount: 10.0,
            delivered: false,
            created_at: shared::util::now_utc(),
        }
    }

    #[test]
    fn test_allocate_returns_counter_and_advances() {
        let mut collection = OrderCollection::default();

        assert_eq!(allocate_id(&mut collection), 1);
        assert_eq!(allocate_id(&mut collection), 2);
        assert_eq!(collection.next_id, 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut collection = OrderCollection::default();
        let id = allocate_id(&mut collection);
        collection.orders.push(order_with_id(id));
        collection.remove(id);

        assert_eq!(allocate_id(&mut collection), 2);
    }

    #[test]
    fn test_counter_behind_existing_ids_is_repaired() {
        let mut collection = OrderCollection {
            next_id: 2,
            orders: vec![order_with_id(1), order_with_id(5)],
        };

        assert_eq!(allocate_id(&mut collection), 6);
        assert_eq!(collection.next_id, 7);
    }
}
