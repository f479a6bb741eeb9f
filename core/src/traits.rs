use num_bigint::BigInt;

/// Abstract source of an interpolation point.
pub trait Point {
    /// The x-coordinate (share index).
    fn x(&self) -> &BigInt;

    /// The value of the polynomial at [`Point::x`].
    fn y(&self) -> &BigInt;
}

impl Point for (BigInt, BigInt) {
    fn x(&self) -> &BigInt {
        &self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<P: Point + ?Sized> Point for &P {
    fn x(&self) -> &BigInt {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
