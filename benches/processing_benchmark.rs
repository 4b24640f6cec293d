use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wsq_importer::models::{Grid, StationIndex, StationRecord};
use wsq_importer::processors::DocumentTransformer;
use wsq_importer::utils::normalize_key;

const LABELS: [&str; 8] = [
    "Temperatura e ujit",
    "pH",
    "Përçueshmëria elektrike",
    "Oksigjeni i tretur",
    "Nitratet (NO3)",
    "Fosfatet totale",
    "Ngjyra",
    "Era",
];

// Create a sheet with one station per five sampling columns
fn create_test_sheet(columns: usize, parameter_rows: usize) -> (Grid, StationIndex) {
    let width = 4 + columns;
    let mut rows = vec![vec![String::new(); width]; 11];
    let mut stations = StationIndex::new();

    for column in 0..columns {
        let cell = 4 + column;
        if column % 5 == 0 {
            let code = format!("S{}", column / 5);
            rows[4][cell] = code.clone();
            rows[5][cell] = format!("Vendi {}", column / 5);
            stations.insert(
                code.clone(),
                StationRecord::new(
                    code,
                    format!("Stacioni {}", column / 5),
                    20.0 + column as f64 * 0.01,
                    42.0,
                    "Drini".to_string(),
                    "Drini i Bardhë".to_string(),
                    "Deti Adriatik".to_string(),
                    4360.0,
                    200.0,
                    300,
                ),
            );
        }
        rows[7][cell] = format!("{:02}.08.2013", column % 28 + 1);
        rows[10][cell] = "09:30".to_string();
    }

    for row in 0..parameter_rows {
        let label = LABELS[row % LABELS.len()];
        let mut cells = vec![
            String::new(),
            format!("{} {}", label, row),
            "x".to_string(),
            "mg/l".to_string(),
        ];
        for column in 0..columns {
            let value = match label {
                "Ngjyra" => "e kthjellët".to_string(),
                "Era" => "pa erë".to_string(),
                _ => format!("{:.2}", (row * columns + column) as f64 * 0.1),
            };
            cells.push(value);
        }
        rows.push(cells);
    }

    (Grid::new(rows), stations)
}

fn benchmark_transformer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let transformer = DocumentTransformer::new().unwrap();

    for columns in [12, 52, 365].iter() {
        let (grid, stations) = create_test_sheet(*columns, 40);

        group.bench_with_input(BenchmarkId::new("columns", columns), columns, |b, _| {
            b.iter(|| transformer.transform(black_box(&grid), black_box(&stations)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_key_normalization(c: &mut Criterion) {
    c.bench_function("normalize_key", |b| {
        b.iter(|| {
            for label in LABELS.iter() {
                black_box(normalize_key(black_box(label)).unwrap());
            }
        });
    });
}

criterion_group!(benches, benchmark_transformer, benchmark_key_normalization);
criterion_main!(benches);
