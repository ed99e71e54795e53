use anyhow::Result;

const OUTPUT_PATH: &str = "supermarkt_sales.xlsx";
const ROWS: usize = 1000;

const HEADER: [&str; 17] = [
    "Invoice ID",
    "Branch",
    "City",
    "Customer_type",
    "Gender",
    "Product line",
    "Unit price",
    "Quantity",
    "Tax 5%",
    "Total",
    "Date",
    "Time",
    "Payment",
    "cogs",
    "gross margin percentage",
    "gross income",
    "Rating",
];

const BRANCHES: [(&str, &str); 3] = [("A", "Yangon"), ("B", "Mandalay"), ("C", "Naypyitaw")];
const CUSTOMER_TYPES: [&str; 2] = ["Member", "Normal"];
const GENDERS: [&str; 2] = ["Female", "Male"];
const PRODUCT_LINES: [&str; 6] = [
    "Electronic accessories",
    "Fashion accessories",
    "Food and beverages",
    "Health and beauty",
    "Home and lifestyle",
    "Sports and travel",
];
const PAYMENTS: [&str; 3] = ["Cash", "Credit card", "Ewallet"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.range(0, items.len() as u64 - 1) as usize]
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .new_sheet("Sales")
        .map_err(|e| anyhow::anyhow!("creating sheet: {e}"))?;

    // Title block above the table, header on row 4, table in columns B..R.
    sheet.get_cell_mut((2, 1)).set_value("Supermarket Sales");
    sheet.get_cell_mut((2, 2)).set_value("Q1 2019, generated sample");
    for (c, name) in HEADER.iter().enumerate() {
        sheet.get_cell_mut((c as u32 + 2, 4)).set_value(*name);
    }

    for i in 0..ROWS {
        let row = i as u32 + 5;
        let (branch, city) = BRANCHES[rng.range(0, 2) as usize];
        let unit_price = round2(10.0 + rng.next_f64() * 90.0);
        let quantity = rng.range(1, 10) as f64;
        let cogs = round2(unit_price * quantity);
        let tax = cogs * 0.05;
        let total = cogs + tax;
        let date = format!("{}/{}/2019", rng.range(1, 3), rng.range(1, 28));
        let time = format!("{:02}:{:02}:00", rng.range(10, 20), rng.range(0, 59));
        let rating = (40.0 + rng.range(0, 60) as f64) / 10.0;
        let invoice = format!(
            "{:03}-{:02}-{:04}",
            rng.range(100, 899),
            rng.range(10, 99),
            rng.range(1000, 9999)
        );

        let text: [(u32, String); 9] = [
            (2, invoice),
            (3, branch.to_string()),
            (4, city.to_string()),
            (5, rng.pick(&CUSTOMER_TYPES).to_string()),
            (6, rng.pick(&GENDERS).to_string()),
            (7, rng.pick(&PRODUCT_LINES).to_string()),
            (12, date),
            (13, time),
            (14, rng.pick(&PAYMENTS).to_string()),
        ];
        for (col, value) in text {
            sheet.get_cell_mut((col, row)).set_value(value);
        }

        let numbers: [(u32, f64); 8] = [
            (8, unit_price),
            (9, quantity),
            (10, tax),
            (11, total),
            (15, cogs),
            (16, 4.761904762),
            (17, tax),
            (18, rating),
        ];
        for (col, value) in numbers {
            sheet.get_cell_mut((col, row)).set_value_number(value);
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, OUTPUT_PATH)
        .map_err(|e| anyhow::anyhow!("writing {OUTPUT_PATH}: {e}"))?;

    println!("Wrote {ROWS} transactions to {OUTPUT_PATH}");
    Ok(())
}
