use seasonscope_analysis::{preference_heatmap, seasonal_heatmap, seasonal_trends};
use seasonscope_core::Dispersion;
use seasonscope_data::customers::read_customers;
use seasonscope_data::orders::read_orders;
use seasonscope_data::Dataset;

const ORDERS: &str = "\
order_id,customer_id,order_purchase_timestamp,product_category_name
o1,c1,2017-01-05 09:00:00,cama_mesa_banho
o2,c1,2017-02-11 14:30:00,cama_mesa_banho
o3,c2,2017-07-21 18:15:00,cama_mesa_banho
o4,c3,2017-12-01 08:00:00,brinquedos
o5,c3,2017-12-15 08:00:00,brinquedos
o6,c3,2017-12-20 08:00:00,brinquedos
o7,c4,2017-04-02 12:00:00,beleza_saude
o8,c4,2017-08-02 12:00:00,beleza_saude
o9,c2,2017-11-09 12:00:00,beleza_saude
o10,c1,2017-03-10 10:00:00,
o11,c5,2017-05-10 10:00:00,brinquedos
";

const CUSTOMERS: &str = "\
customer_id,customer_state
c1,SP
c2,RJ
c3,MG
c4,SP
";

fn dataset() -> Dataset {
    let orders = read_orders(ORDERS.as_bytes()).unwrap();
    let customers = read_customers(CUSTOMERS.as_bytes()).unwrap();
    Dataset::from_parts(orders, customers)
}

#[test]
fn join_drops_orders_without_customer() {
    let data = dataset();
    assert_eq!(data.len(), 10);
    assert!(data.records().iter().all(|r| r.customer_id != "c5"));
}

#[test]
fn seasonal_heatmap_matches_hand_counts() {
    let heatmap = seasonal_heatmap(&dataset(), "cama_mesa_banho").unwrap();
    let m = &heatmap.matrix;

    assert_eq!(m.rows, vec!["RJ", "SP"]);
    assert_eq!(m.columns, vec!["Summer", "Winter"]);
    assert_eq!(m.values, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
}

#[test]
fn trends_rank_holiday_spike_first() {
    let ranked = seasonal_trends(&dataset(), Dispersion::Sample);
    let names: Vec<&str> = ranked.iter().map(|s| s.category.as_str()).collect();

    // brinquedos: [0,0,0,3]; cama_mesa_banho: [2,0,1,0]; beleza_saude: [0,1,1,1]
    assert_eq!(names, vec!["brinquedos", "cama_mesa_banho", "beleza_saude"]);
    assert_eq!(ranked[0].season_counts, [0, 0, 0, 3]);
    assert!((ranked[0].score.unwrap() - 2.0).abs() < 1e-12);
}

#[test]
fn preference_rows_are_shares_of_state_totals() {
    let data = dataset();
    let full = preference_heatmap(&data, 10, Dispersion::Sample).unwrap();
    assert_eq!(full.matrix.columns.len(), 3);
    for sum in full.matrix.row_sums() {
        assert!((sum - 1.0).abs() < 1e-9);
    }

    let top = preference_heatmap(&data, 2, Dispersion::Sample).unwrap();
    assert_eq!(top.matrix.columns.len(), 2);
    assert_eq!(top.matrix.rows, full.matrix.rows);
    for sum in top.matrix.row_sums() {
        assert!(sum <= 1.0 + 1e-9);
    }
}
