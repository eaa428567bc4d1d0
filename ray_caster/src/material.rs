use crate::{light::PointLight, Color, Result, Tuple};

/// Phong reflectance parameters for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Material {
    /// Adds together the ambient, diffuse, and specular contributions at a
    /// surface point, weighted by the angles between the light vector, the
    /// normal, and the eye. The result is left unclamped; the canvas clamps
    /// at serialization time.
    pub fn lighting(
        &self,
        light: PointLight,
        point: Tuple,
        eye_vector: Tuple,
        normal_vector: Tuple,
    ) -> Result<Color> {
        // combine the surface color with the light's color/intensity
        let effective_color = self.color * light.intensity;

        // the direction from the surface point to the light source
        let light_vector = (light.position - point).normalize();

        let ambient = effective_color * self.ambient;

        // cosine of the angle between the light vector and the normal;
        // negative means the light is on the other side of the surface
        let light_dot_normal = light_vector.dot(&normal_vector)?;

        let mut diffuse = Color::black();
        let mut specular = Color::black();

        if light_dot_normal >= 0. {
            diffuse = effective_color * self.diffuse * light_dot_normal;

            // cosine of the angle between the reflection vector and the eye;
            // non-positive means the reflection points away from the eye
            let reflect_vector = (-light_vector).reflect(normal_vector)?;
            let reflect_dot_eye = reflect_vector.dot(&eye_vector)?;

            if reflect_dot_eye > 0. {
                let factor = reflect_dot_eye.powf(self.shininess);
                specular = light.intensity * self.specular * factor;
            }
        }

        Ok(ambient + diffuse + specular)
    }
}

impl Default for Material {
    /// White surface with ambient 0.1, diffuse 0.9, specular 0.9, and
    /// shininess 200.
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}
