//! Figures of "The Elevator Is Slow".
//!
//! Latencies are seconds from a passenger's request until arrival, measured
//! by the elevator simulation the post describes.

use crate::api::{
    BlogChartsConfig, CartesianAxis, ChartBuilder, ChartDefinition, Grid, Series, Tooltip,
    ValueFormatter,
};
use crate::core::{CategoryLabel, pairwise_ratio, range_labels, ratio};
use crate::error::ChartResult;

const MEAN_LATENCY_BY_ELEVATORS: [f64; 5] = [
    117.954068641431,
    55.29700344923757,
    46.57176647707238,
    44.015681663871305,
    42.75975713609125,
];

const MAX_LATENCY_BY_ELEVATORS: [f64; 5] = [
    414.3429391204845,
    186.59320912277326,
    157.90575060830452,
    141.0790516170673,
    138.57926610531285,
];

/// Floors whose latency distribution is plotted in the histogram.
const HISTOGRAM_FLOORS: [(u32, [f64; 18]); 3] = [
    (
        4,
        [
            4.0, 1636.0, 1453.0, 974.0, 463.0, 237.0, 121.0, 53.0, 36.0, 8.0, 5.0, 6.0, 4.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ],
    ),
    (
        12,
        [
            0.0, 2.0, 1014.0, 1364.0, 1153.0, 638.0, 342.0, 217.0, 131.0, 73.0, 39.0, 15.0, 9.0,
            1.0, 2.0, 0.0, 0.0, 0.0,
        ],
    ),
    (
        20,
        [
            0.0, 0.0, 0.0, 659.0, 846.0, 923.0, 995.0, 538.0, 428.0, 233.0, 177.0, 98.0, 42.0,
            36.0, 20.0, 2.0, 2.0, 1.0,
        ],
    ),
];

/// Histogram bucket width in seconds; labels are the bucket upper edges.
const HISTOGRAM_BUCKET_S: i64 = 10;

const FIRST_PLOTTED_FLOOR: i64 = 4;

const MEAN_LATENCY_BY_FLOOR: [f64; 17] = [
    38.70291918383377,
    40.68860665516036,
    42.65609258123861,
    44.76554586575107,
    46.471043307795675,
    48.44538091897792,
    50.26455864726403,
    53.00678411862765,
    54.41530391970092,
    56.719102754388146,
    58.70396701055558,
    61.101082047403814,
    63.86222393886232,
    66.62162959382948,
    68.47235843364575,
    71.62452590066998,
    74.07766553082584,
];

const MAX_LATENCY_BY_FLOOR: [f64; 17] = [
    133.37152319849702,
    149.5396094409516,
    149.52741525904275,
    159.82521815155633,
    148.14974494627677,
    141.87939180643298,
    138.72756127710454,
    174.47362796554808,
    157.35112143610604,
    168.0848355323542,
    145.21891872095875,
    156.69267152022803,
    178.90530922776088,
    180.5266194837168,
    176.50148904777598,
    186.59320912277326,
    183.14009668445215,
];

/// Mean latency with each parameter improved in turn, against the unchanged
/// two-elevator system.
const PARAMETER_MEAN_LATENCY: [(&str, f64); 6] = [
    ("e_vel", 37.8393639353616),
    ("e_d_vel", 47.448846883705926),
    ("e_d_wai", 49.923684426869826),
    ("e_acc", 50.897573266073756),
    ("p_vel", 53.39151825313947),
    ("e_cap", 55.29700344923757),
];

const TWO_ELEVATOR_MEAN_LATENCY: f64 = 55.29700344923757;

/// Mean latency per mean time between requests, for the tuned system and
/// for its reference run.
const THROUGHPUT_INTERVALS_S: [i64; 6] = [20, 19, 18, 17, 16, 15];
const THROUGHPUT_LATENCY: [f64; 6] = [
    186.1835094959234,
    215.82737066987357,
    304.7135737046539,
    26585.631230024308,
    93040.87735298941,
    160528.16941428368,
];
const THROUGHPUT_REFERENCE_LATENCY: [f64; 6] = [
    186.31329990812952,
    214.49205722318948,
    306.52797741267506,
    12543.125026929107,
    45249.710744333715,
    79523.81772432546,
];

pub(super) fn elevator_count(config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let text = config.text_style();
    ChartBuilder::new("chart-elevator-count")
        .size(740, 380)
        .text_style(text.clone())
        .tooltip(Tooltip::axis_shadow().with_text_style(text.clone()))
        .value_formatter(ValueFormatter::fixed(2))
        .grid(Grid::margins(35, 45, 5, 30))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::integers(1..=5))
                .centered_name("Number of Elevators", 35)
                .label_style(text.clone()),
        )
        .y_axis(
            CartesianAxis::value()
                .centered_name("Latency (s)", 50)
                .label_style(text),
        )
        .series(Series::bar("Mean", MEAN_LATENCY_BY_ELEVATORS.to_vec()))
        .series(Series::bar("Max", MAX_LATENCY_BY_ELEVATORS.to_vec()))
        .build()
}

pub(super) fn floor_latency_histogram(_config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let buckets = range_labels(HISTOGRAM_FLOORS[0].1.len() + 1, HISTOGRAM_BUCKET_S)?;
    let mut builder = ChartBuilder::new("chart-floor-latency-histogram")
        .tooltip(Tooltip::axis_shadow())
        .grid(Grid::margins(30, 40, 10, 25))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::integers(buckets.into_iter().skip(1)))
                .centered_name("Latency (s)", 30),
        )
        .y_axis(CartesianAxis::value().centered_name("Count", 50));

    for (floor, counts) in HISTOGRAM_FLOORS {
        builder = builder.series(Series::bar(format!("Floor {floor}"), counts.to_vec()));
    }
    builder.build()
}

pub(super) fn floor_latency_mean_max(config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let text = config.text_style();
    let last_floor = FIRST_PLOTTED_FLOOR + MEAN_LATENCY_BY_FLOOR.len() as i64;
    ChartBuilder::new("chart-floor-latency-mean-max")
        .size(740, 380)
        .text_style(text.clone())
        .tooltip(Tooltip::axis_shadow().with_text_style(text.clone()))
        .value_formatter(ValueFormatter::fixed(2))
        .grid(Grid::margins(35, 45, 5, 30))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::integers(FIRST_PLOTTED_FLOOR..last_floor))
                .centered_name("Floor", 35)
                .label_style(text.clone()),
        )
        .y_axis(
            CartesianAxis::value()
                .centered_name("Latency (s)", 50)
                .label_style(text),
        )
        .series(Series::bar("Mean", MEAN_LATENCY_BY_FLOOR.to_vec()))
        .series(Series::bar("Max", MAX_LATENCY_BY_FLOOR.to_vec()))
        .build()
}

pub(super) fn system_parameter(_config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let latencies: Vec<f64> = PARAMETER_MEAN_LATENCY.iter().map(|(_, v)| *v).collect();
    let ratios = ratio(&latencies, TWO_ELEVATOR_MEAN_LATENCY)?;

    ChartBuilder::new("chart-system-parameter")
        .tooltip(Tooltip::axis_shadow())
        .value_formatter(ValueFormatter::fixed(3))
        .grid(Grid::margins(30, 40, 10, 25))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::texts(
                PARAMETER_MEAN_LATENCY.iter().map(|(name, _)| *name),
            ))
            .centered_name("Parameter", 30),
        )
        .y_axis(CartesianAxis::value().centered_name("Ratio", 35))
        .series(Series::bar("Ratio", ratios))
        .build()
}

pub(super) fn system_throughput(_config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let ratios = pairwise_ratio(&THROUGHPUT_LATENCY, &THROUGHPUT_REFERENCE_LATENCY)?;

    ChartBuilder::new("chart-system-throughput")
        .tooltip(Tooltip::axis_shadow())
        .value_formatter(ValueFormatter::fixed(3))
        .grid(Grid::margins(30, 40, 10, 25))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::integers(THROUGHPUT_INTERVALS_S))
                .centered_name("Mean Time Between Requests (s)", 30),
        )
        .y_axis(CartesianAxis::value().centered_name("Ratio", 35))
        .series(Series::bar("Ratio", ratios))
        .build()
}
