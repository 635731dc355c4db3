//! Integration tests for the HP filter and the surrounding transforms.

use approx::assert_relative_eq;
use macro_transforms::core::{parse_series, to_series, Frequency, Table};
use macro_transforms::filter::{hp_filter, hp_filter_columns, HPFilter, PentadiagonalMatrix};
use macro_transforms::transform::{
    deflate, hp_filter_table, loglevel_to_pct_annualized, per_capita,
};
use macro_transforms::TransformError;

fn quarterly_output(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.6 * t + 2.0 * (2.0 * std::f64::consts::PI * t / 20.0).sin()
        })
        .collect()
}

#[test]
fn golden_series_matches_baseline() {
    let y = [1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 2.0];
    let result = hp_filter(&y, 1600.0).unwrap();

    assert_relative_eq!(result.trend[0], 2.869457341646605, epsilon = 1e-9);
    assert_relative_eq!(result.trend[4], 2.737586684021067, epsilon = 1e-9);
    assert_relative_eq!(result.trend[9], 2.489604055816042, epsilon = 1e-9);
    assert_relative_eq!(result.cycle[4], 2.262413315978933, epsilon = 1e-9);
}

#[test]
fn annual_lambda_baseline() {
    let y = [10.0, 11.0, 13.0, 12.0, 15.0, 16.0, 18.0];
    let result = HPFilter::for_frequency(Frequency::Annual).filter(&y).unwrap();
    let expected = [
        9.734305333549964,
        11.00297363242225,
        12.27429887795903,
        13.5509082805006,
        14.84268606160763,
        16.1440073600358,
        17.45082045392473,
    ];
    for (t, e) in result.trend.iter().zip(expected.iter()) {
        assert_relative_eq!(*t, *e, epsilon = 1e-9);
    }
}

#[test]
fn trend_solves_penalty_system() {
    let y = quarterly_output(60);
    let lambda = 1600.0;
    let result = hp_filter(&y, lambda).unwrap();

    let a = PentadiagonalMatrix::hp_penalty(y.len(), lambda).unwrap();
    let back = a.mul_vec(&result.trend).unwrap();
    for (b, yi) in back.iter().zip(y.iter()) {
        assert_relative_eq!(*b, *yi, max_relative = 1e-8);
    }
}

#[test]
fn trend_preserves_sample_mean() {
    let y = quarterly_output(48);
    let result = hp_filter(&y, 1600.0).unwrap();
    let mean_y = y.iter().sum::<f64>() / y.len() as f64;
    let mean_trend = result.trend.iter().sum::<f64>() / y.len() as f64;
    assert_relative_eq!(mean_y, mean_trend, max_relative = 1e-10);
}

#[test]
fn larger_lambda_gives_smoother_trend() {
    let y = quarterly_output(80);
    let roughness = |trend: &[f64]| -> f64 {
        trend
            .windows(3)
            .map(|w| (w[2] - 2.0 * w[1] + w[0]).powi(2))
            .sum()
    };
    let soft = hp_filter(&y, 10.0).unwrap();
    let stiff = hp_filter(&y, 100_000.0).unwrap();
    assert!(roughness(&stiff.trend) < roughness(&soft.trend));
}

#[test]
fn boundary_sentinels_are_preserved() {
    let core = quarterly_output(12);
    let mut y = vec![f64::NAN; 3];
    y.extend_from_slice(&core);
    y.extend(vec![f64::NAN; 2]);

    let padded = hp_filter(&y, 1600.0).unwrap();
    let unpadded = hp_filter(&core, 1600.0).unwrap();

    assert_eq!(padded.len(), 17);
    for k in 0..17 {
        let inside = (3..15).contains(&k);
        assert_eq!(padded.trend[k].is_nan(), !inside);
        assert_eq!(padded.cycle[k].is_nan(), !inside);
        if inside {
            assert_eq!(padded.trend[k], unpadded.trend[k - 3]);
        }
    }
}

#[test]
fn interior_sentinel_poisons_trimmed_range_only() {
    let mut y = vec![f64::NAN];
    y.extend(quarterly_output(10));
    y[6] = f64::NAN;

    let result = hp_filter(&y, 1600.0).unwrap();
    assert_eq!(result.len(), 11);
    assert!(result.trend.iter().all(|t| t.is_nan()));
    assert!(result.cycle.iter().all(|c| c.is_nan()));
}

#[test]
fn very_large_lambda_is_not_an_error() {
    let y = quarterly_output(200);
    for lambda in [1e16, 1e18] {
        let result = hp_filter(&y, lambda).unwrap();
        assert_eq!(result.len(), y.len());
        // The trend collapses to a straight line.
        for w in result.trend.windows(3) {
            assert_relative_eq!(w[2] - 2.0 * w[1] + w[0], 0.0, epsilon = 1e-8);
        }
        for k in 0..y.len() {
            assert_relative_eq!(result.trend[k] + result.cycle[k], y[k], max_relative = 1e-12);
        }
    }
}

#[test]
fn precondition_failures() {
    assert_eq!(
        hp_filter(&[1.0, 2.0, 3.0], 1600.0),
        Err(TransformError::SeriesTooShort { needed: 5, got: 3 })
    );
    assert_eq!(
        hp_filter(&[f64::NAN, f64::NAN], 1600.0),
        Err(TransformError::EmptySeries)
    );
    assert_eq!(hp_filter(&[], 1600.0), Err(TransformError::EmptySeries));
}

#[test]
fn parallel_matches_sequential() {
    let columns: Vec<Vec<f64>> = (0..8)
        .map(|k| {
            quarterly_output(30)
                .into_iter()
                .map(|v| v * (1.0 + k as f64 * 0.1))
                .collect()
        })
        .collect();

    let parallel = hp_filter_columns(&columns, 1600.0);
    for (column, result) in columns.iter().zip(parallel) {
        assert_eq!(result.unwrap(), hp_filter(column, 1600.0).unwrap());
    }
}

#[test]
fn parsed_input_flows_into_filter() {
    let fields = ["NA", "1", "2", "3", "4", "5", "4", "3", "2", "1", "2", ""];
    let y = parse_series(&fields).unwrap();
    let result = hp_filter(&y, 1600.0).unwrap();
    assert!(result.trend[0].is_nan());
    assert!(result.trend[11].is_nan());
    assert_relative_eq!(result.trend[1], 2.869457341646605, epsilon = 1e-9);

    let column = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]];
    assert_eq!(to_series(&column).unwrap().len(), 5);
    assert!(matches!(
        to_series(&[vec![1.0, 2.0], vec![3.0, 4.0]]),
        Err(TransformError::NotConvertibleToSeries(_))
    ));
}

#[test]
fn table_pipeline_real_per_capita_gap() {
    let n = 24;
    let mut table = Table::new(n)
        .with_column("GDP", quarterly_output(n).iter().map(|v| v * 10.0).collect())
        .unwrap()
        .with_column("GDPDEF", (0..n).map(|i| 1.0 + 0.005 * i as f64).collect())
        .unwrap()
        .with_column("CNP16OV", (0..n).map(|i| 200.0 + 0.3 * i as f64).collect())
        .unwrap();

    deflate(&mut table, "GDP", "GDPDEF", "RGDP").unwrap();
    per_capita(&mut table, "RGDP", "CNP16OV", "RGDP_pc").unwrap();
    hp_filter_table(&mut table, &["RGDP", "RGDP_pc"], 1600.0).unwrap();

    let series = table.column("RGDP_pc").unwrap().to_vec();
    let trend = table.column("RGDP_pc_trend").unwrap();
    let cycle = table.column("RGDP_pc_cycle").unwrap();
    for k in 0..n {
        assert_relative_eq!(trend[k] + cycle[k], series[k], max_relative = 1e-10);
    }

    assert_eq!(
        per_capita(&mut table, "RGDP", "POP", "x"),
        Err(TransformError::MissingColumn("POP".to_string()))
    );
}

#[test]
fn trend_growth_reported_annualized() {
    let log_levels: Vec<f64> = (0..20).map(|i| 100.0 * (1.0 + 0.005 * i as f64)).collect();
    let result = hp_filter(&log_levels, 1600.0).unwrap();
    let growth = loglevel_to_pct_annualized(&result.trend, f64::NAN);

    assert!(growth[0].is_nan());
    // Linear log level of 0.5 per quarter is 2% annualized log growth.
    for g in &growth[1..] {
        assert_relative_eq!(*g, 100.0 * (0.02_f64.exp() - 1.0), epsilon = 1e-6);
    }
}
