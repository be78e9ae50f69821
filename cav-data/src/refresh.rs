//! Redraw the map's marker layers when the data changes.
//!
//! [`MarkerRefresher`] owns the sink and the three layer handles it created.
//! The host calls [`MarkerRefresher::mount`] once and
//! [`MarkerRefresher::update`] on every later render; only updates whose
//! snapshot differs from the one on screen clear and redraw the layers.

use crate::markers::{build_marker_set, MarkerLayer, MarkerStyle, PopupContent};
use crate::snapshot::{should_refresh, DataSnapshot};
use cav_stations::LatLng;

/// A map widget that can hold layers of circle markers.
pub trait MarkerSink {
    /// Handle to a layer created by this sink.
    type Layer;

    fn create_layer(&mut self, layer: MarkerLayer) -> Self::Layer;

    fn add_marker(
        &mut self,
        layer: &Self::Layer,
        position: LatLng,
        style: &MarkerStyle,
        popup: Option<&PopupContent>,
    );

    fn clear_layer(&mut self, layer: &Self::Layer);

    /// Remove the layer from the map; the handle is not used again.
    fn release_layer(&mut self, layer: &Self::Layer);

    /// Called after a batch of marker changes.
    fn flush(&mut self) {}
}

struct MarkerLayers<L> {
    baseline: L,
    monthly: L,
    data: L,
}

impl<L> MarkerLayers<L> {
    fn get(&self, layer: MarkerLayer) -> &L {
        match layer {
            MarkerLayer::BaselineStations => &self.baseline,
            MarkerLayer::MonthlyStations => &self.monthly,
            MarkerLayer::DataValues => &self.data,
        }
    }
}

pub struct MarkerRefresher<S: MarkerSink> {
    sink: S,
    layers: MarkerLayers<S::Layer>,
    rendered: Option<DataSnapshot>,
}

impl<S: MarkerSink> MarkerRefresher<S> {
    pub fn new(mut sink: S) -> Self {
        let layers = MarkerLayers {
            baseline: sink.create_layer(MarkerLayer::BaselineStations),
            monthly: sink.create_layer(MarkerLayer::MonthlyStations),
            data: sink.create_layer(MarkerLayer::DataValues),
        };
        sink.flush();
        Self {
            sink,
            layers,
            rendered: None,
        }
    }

    /// Initial population of the layers.
    pub fn mount(&mut self, snapshot: DataSnapshot, variable: &str) {
        log::debug!("mounting {} markers", snapshot.dataset);
        self.draw(&snapshot, variable);
        self.rendered = Some(snapshot);
    }

    /// Redraw if `snapshot` differs from what is on screen. Returns whether it did.
    ///
    /// An update before any mount mounts the snapshot instead.
    pub fn update(&mut self, snapshot: DataSnapshot, variable: &str) -> bool {
        let changed = self
            .rendered
            .as_ref()
            .map(|previous| should_refresh(previous, &snapshot));
        match changed {
            None => {
                self.mount(snapshot, variable);
                true
            }
            Some(true) => {
                self.refresh(&snapshot, variable);
                self.rendered = Some(snapshot);
                true
            }
            Some(false) => false,
        }
    }

    /// Clear every layer, then draw `snapshot`.
    pub fn refresh(&mut self, snapshot: &DataSnapshot, variable: &str) {
        log::info!(
            "refreshing markers: dataset={} baseline={} monthly={}",
            snapshot.dataset,
            snapshot.baseline.len(),
            snapshot.monthly.len()
        );
        for layer in MarkerLayer::ALL {
            self.sink.clear_layer(self.layers.get(layer));
        }
        self.draw(snapshot, variable);
    }

    pub fn rendered(&self) -> Option<&DataSnapshot> {
        self.rendered.as_ref()
    }

    fn draw(&mut self, snapshot: &DataSnapshot, variable: &str) {
        let set = build_marker_set(snapshot, variable);
        if set.skipped > 0 {
            log::warn!("{} station records not drawn", set.skipped);
        }
        log::debug!("drawing {} markers", set.marker_count());
        for group in &set.layers {
            let handle = self.layers.get(group.layer);
            for marker in &group.markers {
                self.sink
                    .add_marker(handle, marker.position, &group.style, marker.popup.as_ref());
            }
        }
        self.sink.flush();
    }
}

impl<S: MarkerSink> Drop for MarkerRefresher<S> {
    fn drop(&mut self) {
        for layer in MarkerLayer::ALL {
            self.sink.release_layer(self.layers.get(layer));
        }
        self.sink.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cav_stations::{Dataset, StationRecord};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(MarkerLayer),
        Add(MarkerLayer, String, bool),
        Clear(MarkerLayer),
        Release(MarkerLayer),
        Flush,
    }

    #[derive(Default, Clone)]
    struct RecordingSink {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<Call> {
            self.calls.borrow_mut().drain(..).collect()
        }
    }

    impl MarkerSink for RecordingSink {
        type Layer = MarkerLayer;

        fn create_layer(&mut self, layer: MarkerLayer) -> MarkerLayer {
            self.calls.borrow_mut().push(Call::Create(layer));
            layer
        }

        fn add_marker(
            &mut self,
            layer: &MarkerLayer,
            _position: LatLng,
            style: &MarkerStyle,
            popup: Option<&PopupContent>,
        ) {
            self.calls
                .borrow_mut()
                .push(Call::Add(*layer, style.color.clone(), popup.is_some()));
        }

        fn clear_layer(&mut self, layer: &MarkerLayer) {
            self.calls.borrow_mut().push(Call::Clear(*layer));
        }

        fn release_layer(&mut self, layer: &MarkerLayer) {
            self.calls.borrow_mut().push(Call::Release(*layer));
        }

        fn flush(&mut self) {
            self.calls.borrow_mut().push(Call::Flush);
        }
    }

    fn snapshot(dataset: Dataset, statistic: f64) -> DataSnapshot {
        DataSnapshot::new(
            dataset,
            vec![StationRecord::new(1, "A").with_location(49.0, -123.0).with_datum(5.0)],
            vec![StationRecord::new(1, "A")
                .with_location(49.0, -123.0)
                .with_statistic(statistic)],
        )
    }

    #[test]
    fn creates_layers_up_front() {
        let sink = RecordingSink::default();
        let _refresher = MarkerRefresher::new(sink.clone());
        assert_eq!(
            sink.take(),
            vec![
                Call::Create(MarkerLayer::BaselineStations),
                Call::Create(MarkerLayer::MonthlyStations),
                Call::Create(MarkerLayer::DataValues),
                Call::Flush,
            ]
        );
    }

    #[test]
    fn mount_draws_without_clearing() {
        let sink = RecordingSink::default();
        let mut refresher = MarkerRefresher::new(sink.clone());
        sink.take();

        refresher.mount(snapshot(Dataset::Anomaly, 7.5), "precip");
        assert_eq!(
            sink.take(),
            vec![
                Call::Add(MarkerLayer::BaselineStations, "#000000".into(), false),
                Call::Add(MarkerLayer::MonthlyStations, "#000000".into(), false),
                Call::Add(MarkerLayer::DataValues, "#36ff32".into(), true),
                Call::Flush,
            ]
        );
        assert!(refresher.rendered().is_some());
    }

    #[test]
    fn unchanged_update_does_nothing() {
        let sink = RecordingSink::default();
        let mut refresher = MarkerRefresher::new(sink.clone());
        refresher.mount(snapshot(Dataset::Anomaly, 7.5), "precip");
        sink.take();

        assert!(!refresher.update(snapshot(Dataset::Anomaly, 7.5), "precip"));
        assert!(sink.take().is_empty());
    }

    #[test]
    fn changed_update_clears_all_layers_then_redraws() {
        let sink = RecordingSink::default();
        let mut refresher = MarkerRefresher::new(sink.clone());
        refresher.mount(snapshot(Dataset::Anomaly, 7.5), "precip");
        sink.take();

        assert!(refresher.update(snapshot(Dataset::Monthly, 7.5), "tmax"));
        let calls = sink.take();
        assert_eq!(
            &calls[..3],
            &[
                Call::Clear(MarkerLayer::BaselineStations),
                Call::Clear(MarkerLayer::MonthlyStations),
                Call::Clear(MarkerLayer::DataValues),
            ]
        );
        assert_eq!(calls[5], Call::Add(MarkerLayer::DataValues, "#ff6831".into(), true));
        assert_eq!(calls.len(), 7);
        assert_eq!(refresher.rendered().unwrap().dataset, Dataset::Monthly);

        assert!(!refresher.update(snapshot(Dataset::Monthly, 7.5), "tmax"));
        assert!(sink.take().is_empty());
    }

    #[test]
    fn update_before_mount_draws() {
        let sink = RecordingSink::default();
        let mut refresher = MarkerRefresher::new(sink.clone());
        sink.take();

        assert!(refresher.update(snapshot(Dataset::Baseline, 1.0), "tmin"));
        let calls = sink.take();
        assert!(!calls.iter().any(|c| matches!(c, Call::Clear(_))));
        assert_eq!(calls.len(), 4);
    }

    #[test]
    fn variable_change_alone_does_not_redraw() {
        let sink = RecordingSink::default();
        let mut refresher = MarkerRefresher::new(sink.clone());
        refresher.mount(snapshot(Dataset::Anomaly, 7.5), "precip");
        sink.take();

        assert!(!refresher.update(snapshot(Dataset::Anomaly, 7.5), "tmin"));
        assert!(sink.take().is_empty());
    }

    #[test]
    fn variable_change_recolours_with_next_data() {
        let sink = RecordingSink::default();
        let mut refresher = MarkerRefresher::new(sink.clone());
        refresher.mount(snapshot(Dataset::Anomaly, 7.5), "precip");
        assert!(!refresher.update(snapshot(Dataset::Anomaly, 7.5), "tmin"));
        sink.take();

        // records for the new variable arrive
        assert!(refresher.update(snapshot(Dataset::Anomaly, 3.0), "tmin"));
        let data: Vec<Call> = sink
            .take()
            .into_iter()
            .filter(|c| matches!(c, Call::Add(MarkerLayer::DataValues, ..)))
            .collect();
        assert_eq!(data, vec![Call::Add(MarkerLayer::DataValues, "#3388ff".into(), true)]);
    }

    #[test]
    fn drop_releases_layers() {
        let sink = RecordingSink::default();
        let refresher = MarkerRefresher::new(sink.clone());
        sink.take();
        drop(refresher);
        assert_eq!(
            sink.take(),
            vec![
                Call::Release(MarkerLayer::BaselineStations),
                Call::Release(MarkerLayer::MonthlyStations),
                Call::Release(MarkerLayer::DataValues),
                Call::Flush,
            ]
        );
    }
}
