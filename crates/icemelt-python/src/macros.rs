/// Generate a frozen `#[pyclass]` struct holding one NumPy array per column
/// of a `*Series` struct, plus any extra plain fields.
///
/// Also generates a `from_series()` constructor that moves each column into
/// a NumPy array.
macro_rules! define_series_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
        extra {
            $($(#[$extra_meta:meta])* $extra:ident: $extra_ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: Py<numpy::PyArray1<f64>>,
            )+
            $(
                $(#[$extra_meta])*
                #[pyo3(get)]
                pub $extra: $extra_ty,
            )*
        }

        impl $name {
            pub fn from_series(
                py: pyo3::Python<'_>,
                series: $core_type,
                $($extra: $extra_ty,)*
            ) -> Self {
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, series.$field).unbind(),
                    )+
                    $($extra,)*
                }
            }
        }
    };
}

/// Convert a `*Series` struct into a `PyDict` of NumPy arrays.
macro_rules! series_to_dict {
    ($py:expr, $series:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), numpy::PyArray1::from_vec($py, $series.$field))?;
        )+
        dict
    }};
}
