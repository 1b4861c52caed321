use std::collections::{HashSet, VecDeque};
use std::marker::PhantomData;

use crate::api::capture::*;
use crate::model::{BaseType, ContainerKind, Value};
use crate::prelude::{Coercible, Collectable};

type Accessor<T, F> = Box<dyn Fn(&mut T) -> &mut F>;

fn convert<F: Coercible>(value: Value) -> Result<F, InvalidCapture> {
    let type_name = std::any::type_name::<F>();
    let copy = value.clone();
    F::from_value(value).ok_or(InvalidCapture::InvalidConversion {
        value: copy,
        type_name,
    })
}

/// An option field that takes a single value.
///
/// The field is written through the `accessor`, which selects the field on a target `T`.
pub struct Scalar<T, F> {
    accessor: Accessor<T, F>,
}

impl<T, F> Scalar<T, F> {
    /// Create a scalar field.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::Scalar;
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     count: i32,
    /// }
    ///
    /// Scalar::new(|options: &mut Options| &mut options.count);
    /// ```
    pub fn new(accessor: impl Fn(&mut T) -> &mut F + 'static) -> Self {
        Self {
            accessor: Box::new(accessor),
        }
    }
}

impl<T, F> GenericCapturable<T> for Scalar<T, F>
where
    F: Coercible + Default,
{
    fn base_type(&self) -> BaseType {
        F::base_type()
    }

    fn container(&self) -> ContainerKind {
        ContainerKind::Scalar
    }

    fn capture(&self, target: &mut T, value: Value) -> Result<(), InvalidCapture> {
        *(self.accessor)(target) = convert(value)?;
        Ok(())
    }

    fn reset(&self, target: &mut T) {
        *(self.accessor)(target) = F::default();
    }
}

/// An option field that maps down to [`Option`], taking a single value.
pub struct Optional<T, F> {
    accessor: Accessor<T, Option<F>>,
}

impl<T, F> Optional<T, F> {
    /// Create an optional field.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::Optional;
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     name: Option<String>,
    /// }
    ///
    /// Optional::new(|options: &mut Options| &mut options.name);
    /// ```
    pub fn new(accessor: impl Fn(&mut T) -> &mut Option<F> + 'static) -> Self {
        Self {
            accessor: Box::new(accessor),
        }
    }
}

impl<T, F> GenericCapturable<T> for Optional<T, F>
where
    F: Coercible,
{
    fn base_type(&self) -> BaseType {
        F::base_type()
    }

    fn container(&self) -> ContainerKind {
        ContainerKind::Optional
    }

    fn capture(&self, target: &mut T, value: Value) -> Result<(), InvalidCapture> {
        (self.accessor)(target).replace(convert(value)?);
        Ok(())
    }

    fn reset(&self, target: &mut T) {
        (self.accessor)(target).take();
    }
}

/// An option field that collects every value it is given.
///
/// Each occurrence of the option adds one item to the [`Collectable`].
pub struct Collection<T, C, F> {
    accessor: Accessor<T, C>,
    _phantom: PhantomData<fn() -> F>,
}

impl<T, C, F> Collection<T, C, F>
where
    C: Collectable<F>,
{
    /// Create a collection field.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::Collection;
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     items: Vec<i32>,
    /// }
    ///
    /// Collection::<_, _, i32>::new(|options: &mut Options| &mut options.items);
    /// ```
    pub fn new(accessor: impl Fn(&mut T) -> &mut C + 'static) -> Self {
        Self {
            accessor: Box::new(accessor),
            _phantom: PhantomData,
        }
    }
}

impl<T, C, F> GenericCapturable<T> for Collection<T, C, F>
where
    C: Collectable<F> + Default,
    F: Coercible,
{
    fn base_type(&self) -> BaseType {
        F::base_type()
    }

    fn container(&self) -> ContainerKind {
        ContainerKind::Collection
    }

    fn capture(&self, target: &mut T, value: Value) -> Result<(), InvalidCapture> {
        (self.accessor)(target).add(convert(value)?);
        Ok(())
    }

    fn reset(&self, target: &mut T) {
        *(self.accessor)(target) = C::default();
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Collectable<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T> Collectable<T> for Box<[T]> {
    fn add(&mut self, item: T) {
        let mut items = std::mem::take(self).into_vec();
        items.push(item);
        *self = items.into_boxed_slice();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Target {
        count: i32,
        name: Option<String>,
        items: Vec<f64>,
    }

    #[test]
    fn vec() {
        let mut collection: Vec<u32> = Vec::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, vec![1, 0]);
    }

    #[test]
    fn vec_deque() {
        let mut collection: VecDeque<u32> = VecDeque::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, VecDeque::from([1, 0]));
    }

    #[test]
    fn hash_set() {
        let mut collection: HashSet<u32> = HashSet::default();
        collection.add(1);
        collection.add(0);
        collection.add(1);
        assert_eq!(collection, HashSet::from([1, 0]));
    }

    #[test]
    fn boxed_slice() {
        let mut collection: Box<[u32]> = Box::default();
        collection.add(1);
        assert_eq!(collection.len(), 1);
        collection.add(0);
        collection.add(1);
        assert_eq!(&*collection, &[1, 0, 1]);
    }

    #[test]
    fn scalar_capture() {
        // Setup
        let mut target = Target::default();
        let scalar = Scalar::new(|t: &mut Target| &mut t.count);

        // Execute
        scalar.capture(&mut target, Value::Int(5)).unwrap();

        // Verify
        assert_eq!(target.count, 5);
        assert_eq!(scalar.base_type(), BaseType::Int);
        assert_eq!(scalar.container(), ContainerKind::Scalar);

        scalar.reset(&mut target);
        assert_eq!(target.count, 0);
    }

    #[test]
    fn scalar_capture_invalid() {
        // Setup
        let mut target = Target::default();
        let scalar = Scalar::new(|t: &mut Target| &mut t.count);

        // Execute
        let error = scalar
            .capture(&mut target, Value::Str("5".to_string()))
            .unwrap_err();

        // Verify
        assert_matches!(error, InvalidCapture::InvalidConversion { type_name, .. } => {
            assert_eq!(type_name, "i32");
        });
        assert_eq!(target.count, 0);
    }

    #[test]
    fn optional_capture() {
        // Setup
        let mut target = Target::default();
        let optional = Optional::new(|t: &mut Target| &mut t.name);

        // Execute
        optional
            .capture(&mut target, Value::Str("abc".to_string()))
            .unwrap();

        // Verify
        assert_eq!(target.name, Some("abc".to_string()));
        assert_eq!(optional.base_type(), BaseType::String);
        assert_eq!(optional.container(), ContainerKind::Optional);

        optional.reset(&mut target);
        assert_eq!(target.name, None);
    }

    #[test]
    fn collection_capture() {
        // Setup
        let mut target = Target::default();
        let collection = Collection::<_, _, f64>::new(|t: &mut Target| &mut t.items);

        // Execute
        collection.capture(&mut target, Value::Double(1.5)).unwrap();
        collection.capture(&mut target, Value::Double(0.5)).unwrap();

        // Verify
        assert_eq!(target.items, vec![1.5, 0.5]);
        assert_eq!(collection.base_type(), BaseType::Double);
        assert_eq!(collection.container(), ContainerKind::Collection);

        collection.reset(&mut target);
        assert_eq!(target.items, Vec::<f64>::default());
    }
}
