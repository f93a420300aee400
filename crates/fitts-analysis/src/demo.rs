//! The documented demonstration trial.
//!
//! A single 2D trial with a curved approach, a small overshoot and one
//! re-entry into the target. Analyzed with the default configuration it
//! yields TRE = 1, TAC = 4, MDC = 4, ODC = 5, MV = 24.53, ME = 26.84 and
//! MO = 20.53.
//!
//! ```
//! use fitts_analysis::{accuracy::AccuracyAnalyzer, demo};
//!
//! let measures = AccuracyAnalyzer::default()
//!     .analyze(demo::FROM, demo::TO, demo::WIDTH, &demo::path())
//!     .unwrap();
//! assert_eq!(measures.tre, 1);
//! assert!((measures.mv - 24.53).abs() < 0.01);
//! ```

use crate::Point;

pub const FROM: Point = Point::new(856.5, 501.0);
pub const TO: Point = Point::new(515.0, 159.5);
pub const WIDTH: f64 = 60.0;

/// The 149 sampled pointer positions of the trial.
#[must_use]
pub fn path() -> Vec<Point> {
    PATH_X
        .iter()
        .zip(PATH_Y)
        .map(|(&x, y)| Point::new(x, y))
        .collect()
}

const PATH_X: [f64; 149] = [
    842.0, 847.0, 850.0, 852.0, 854.0, 856.0, 858.0, 860.0, 863.0, 864.0, 865.0, 865.0,
    862.0, 858.0, 854.0, 848.0, 839.0, 830.0, 819.0, 807.0, 794.0, 781.0, 768.0, 754.0,
    742.0, 728.0, 715.0, 699.0, 688.0, 675.0, 659.0, 637.0, 625.0, 613.0, 602.0, 591.0,
    580.0, 562.0, 554.0, 546.0, 539.0, 534.0, 528.0, 523.0, 520.0, 516.0, 514.0, 511.0,
    508.0, 506.0, 503.0, 501.0, 498.0, 496.0, 493.0, 491.0, 488.0, 486.0, 484.0, 482.0,
    482.0, 481.0, 481.0, 481.0, 481.0, 481.0, 482.0, 482.0, 482.0, 483.0, 484.0, 485.0,
    486.0, 490.0, 492.0, 495.0, 497.0, 500.0, 503.0, 506.0, 509.0, 512.0, 515.0, 518.0,
    521.0, 523.0, 526.0, 530.0, 533.0, 536.0, 537.0, 538.0, 540.0, 541.0, 541.0, 542.0,
    543.0, 544.0, 544.0, 545.0, 546.0, 548.0, 549.0, 551.0, 553.0, 556.0, 558.0, 560.0,
    563.0, 566.0, 568.0, 571.0, 573.0, 574.0, 575.0, 576.0, 575.0, 573.0, 571.0, 569.0,
    567.0, 565.0, 563.0, 562.0, 559.0, 557.0, 552.0, 548.0, 543.0, 541.0, 538.0, 536.0,
    533.0, 531.0, 528.0, 527.0, 525.0, 523.0, 521.0, 519.0, 517.0, 515.0, 514.0, 512.0,
    510.0, 508.0, 506.0, 504.0, 502.0,
];

const PATH_Y: [f64; 149] = [
    499.0, 501.0, 503.0, 504.0, 505.0, 506.0, 507.0, 507.0, 508.0, 508.0, 507.0, 505.0,
    501.0, 496.0, 490.0, 483.0, 474.0, 465.0, 455.0, 445.0, 434.0, 423.0, 412.0, 401.0,
    391.0, 380.0, 368.0, 355.0, 345.0, 334.0, 321.0, 302.0, 292.0, 282.0, 273.0, 265.0,
    257.0, 247.0, 242.0, 238.0, 235.0, 232.0, 230.0, 228.0, 227.0, 226.0, 225.0, 224.0,
    223.0, 222.0, 221.0, 219.0, 218.0, 217.0, 216.0, 215.0, 213.0, 212.0, 210.0, 209.0,
    208.0, 207.0, 206.0, 205.0, 204.0, 203.0, 202.0, 202.0, 202.0, 201.0, 201.0, 200.0,
    200.0, 201.0, 201.0, 201.0, 201.0, 201.0, 200.0, 199.0, 199.0, 197.0, 195.0, 193.0,
    190.0, 187.0, 182.0, 174.0, 168.0, 160.0, 156.0, 151.0, 144.0, 141.0, 140.0, 140.0,
    141.0, 142.0, 145.0, 148.0, 154.0, 160.0, 168.0, 176.0, 185.0, 195.0, 203.0, 211.0,
    220.0, 230.0, 238.0, 244.0, 250.0, 253.0, 258.0, 262.0, 270.0, 269.0, 268.0, 266.0,
    265.0, 263.0, 260.0, 258.0, 255.0, 251.0, 244.0, 237.0, 232.0, 229.0, 226.0, 223.0,
    220.0, 217.0, 213.0, 211.0, 207.0, 204.0, 201.0, 198.0, 195.0, 191.0, 189.0, 186.0,
    184.0, 181.0, 179.0, 177.0, 175.0,
];
