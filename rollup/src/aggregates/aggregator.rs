//! Trait for implementing new aggregate operations

use crate::error::AggregateError;

/// A running computation over a sequence of input values.
///
/// The lifecycle of an aggregator is:
/// * any number of calls to [`Aggregator::step`], one per input value in sequence order,
/// * exactly one call to [`Aggregator::finish`],
/// * any number of calls to [`Aggregator::value`].
///
/// [`Aggregator::value`] may also be called before finishing,
/// in which case it reports the running state.
/// Before the first input most aggregates report `None`.
pub trait Aggregator<I> {
    /// Type of the reported result
    type Output;

    /// Processes one input value and updates the internal state.
    ///
    /// Fails only if a key function rejects the input or if checked arithmetic overflows.
    fn step(&mut self, input: &I) -> Result<(), AggregateError>;

    /// Converts the running state into the final result.
    ///
    /// Calling this more than once has no further effect.
    fn finish(&mut self);

    /// Returns the current result.
    fn value(&self) -> Self::Output;
}

impl<I, A> Aggregator<I> for Box<A>
where
    A: Aggregator<I> + ?Sized,
{
    type Output = A::Output;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        (**self).step(input)
    }

    fn finish(&mut self) {
        (**self).finish()
    }

    fn value(&self) -> Self::Output {
        (**self).value()
    }
}

/// Aggregates are stepped and finished in list order.
impl<I, A> Aggregator<I> for Vec<A>
where
    A: Aggregator<I>,
{
    type Output = Vec<A::Output>;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        for aggregator in self.iter_mut() {
            aggregator.step(input)?;
        }

        Ok(())
    }

    fn finish(&mut self) {
        for aggregator in self.iter_mut() {
            aggregator.finish();
        }
    }

    fn value(&self) -> Self::Output {
        self.iter().map(|aggregator| aggregator.value()).collect()
    }
}

macro_rules! aggregator_tuple {
    ($($name:ident . $index:tt),+) => {
        impl<I, $($name),+> Aggregator<I> for ($($name,)+)
        where
            $($name: Aggregator<I>),+
        {
            type Output = ($(<$name as Aggregator<I>>::Output,)+);

            fn step(&mut self, input: &I) -> Result<(), AggregateError> {
                $(self.$index.step(input)?;)+
                Ok(())
            }

            fn finish(&mut self) {
                $(self.$index.finish();)+
            }

            fn value(&self) -> Self::Output {
                ($(self.$index.value(),)+)
            }
        }
    };
}

aggregator_tuple!(A.0);
aggregator_tuple!(A.0, B.1);
aggregator_tuple!(A.0, B.1, C.2);
aggregator_tuple!(A.0, B.1, C.2, D.3);
aggregator_tuple!(A.0, B.1, C.2, D.3, E.4);
aggregator_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
aggregator_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
aggregator_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
