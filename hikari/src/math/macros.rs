// Component-wise container impls shared by the vector and spectrum types.
// Each type is given as `Type [component: index ...]`.

macro_rules! impl_container {
    ( $( $container:ident [ $( $component:ident : $index:literal )+ ] ),+ ) => {
        $(
            impl<T> $container<T>
            where
                T: ValueType,
            {
                /// Constructs a new instance of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: T::zero(),)*
                    }
                }

                /// Constructs a new instance of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self {
                        $($component: T::one(),)*
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    #[allow(clippy::eq_op)]
                    let nan = $(self.$component != self.$component)||*;
                    nan
                }
            }

            impl<T> From<T> for $container<T>
            where
                T: ValueType,
            {
                fn from(v: T) -> Self {
                    Self {
                        $($component: v,)*
                    }
                }
            }

            impl<T> Index<usize> for $container<T>
            where
                T: ValueType,
            {
                type Output = T;

                fn index(&self, component: usize) -> &T {
                    match component {
                        $($index => &self.$component,)*
                        _ => panic!("Out of bounds {} access with index {}", stringify!($container), component),
                    }
                }
            }

            impl<T> IndexMut<usize> for $container<T>
            where
                T: ValueType,
            {
                fn index_mut(&mut self, component: usize) -> &mut T {
                    match component {
                        $($index => &mut self.$component,)*
                        _ => panic!("Out of bounds {} access with index {}", stringify!($container), component),
                    }
                }
            }

            impl<T> Neg for $container<T>
            where
                T: Signed + ValueType,
            {
                type Output = Self;

                fn neg(self) -> Self {
                    debug_assert!(!self.has_nans());

                    Self {
                        $($component: -self.$component,)*
                    }
                }
            }

            impl<T> Add for $container<T>
            where
                T: ValueType,
            {
                type Output = Self;

                #[inline]
                fn add(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component + other.$component,)*
                    }
                }
            }

            impl<T> Sub for $container<T>
            where
                T: ValueType,
            {
                type Output = Self;

                #[inline]
                fn sub(self, other: Self) -> Self {
                    Self {
                        $($component: self.$component - other.$component,)*
                    }
                }
            }

            impl<T> AddAssign for $container<T>
            where
                T: ValueType,
            {
                #[inline]
                fn add_assign(&mut self, other: Self) {
                    $(self.$component += other.$component;)*
                }
            }

            impl<T> SubAssign for $container<T>
            where
                T: ValueType,
            {
                #[inline]
                fn sub_assign(&mut self, other: Self) {
                    $(self.$component -= other.$component;)*
                }
            }

            impl<T> Mul<T> for $container<T>
            where
                T: ValueType,
            {
                type Output = Self;

                #[inline]
                fn mul(self, s: T) -> Self {
                    Self {
                        $($component: self.$component * s,)*
                    }
                }
            }

            impl<T> Div<T> for $container<T>
            where
                T: ValueType,
            {
                type Output = Self;

                #[inline]
                fn div(self, s: T) -> Self {
                    Self {
                        $($component: self.$component / s,)*
                    }
                }
            }

            impl<T> MulAssign<T> for $container<T>
            where
                T: ValueType,
            {
                #[inline]
                fn mul_assign(&mut self, s: T) {
                    $(self.$component *= s;)*
                }
            }

            impl<T> DivAssign<T> for $container<T>
            where
                T: ValueType,
            {
                #[inline]
                fn div_assign(&mut self, s: T) {
                    $(self.$component /= s;)*
                }
            }

            impl<T> AbsDiffEq for $container<T>
            where
                T: ValueType + AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    $(self.$component.abs_diff_eq(&other.$component, epsilon))&&*
                }
            }

            impl<T> RelativeEq for $container<T>
            where
                T: ValueType + RelativeEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    $(self.$component.relative_eq(&other.$component, epsilon, max_relative))&&*
                }
            }
        )*
    };
}

// Dot product needs the first component separately since we can't separate the
// expansion with '+'
macro_rules! impl_vec_dot {
    ( $( $vec_type:ident [ $component0:ident $( $component:ident )* ] ),+ ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Returns the dot product of the two vectors.
                #[inline]
                pub fn dot(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    self.$component0 * other.$component0 $(+ self.$component * other.$component)*
                }

                /// Returns the vector's squared length.
                #[inline]
                pub fn len_sqr(&self) -> T {
                    self.dot(*self)
                }
            }

            impl<T> $vec_type<T>
            where
                T: FloatValueType,
            {
                /// Returns the vector's length.
                #[inline]
                pub fn len(&self) -> T {
                    self.len_sqr().sqrt()
                }

                /// Returns the normalized vector.
                ///
                /// The vector must have a non-zero length.
                #[inline]
                pub fn normalized(&self) -> Self {
                    let len = self.len();
                    debug_assert!(len > T::zero(), "Normalizing a zero length vector");

                    *self / len
                }

                /// Normalizes the vector in place.
                ///
                /// The vector must have a non-zero length.
                #[inline]
                pub fn normalize(&mut self) {
                    *self = self.normalized();
                }
            }
        )*
    };
}
