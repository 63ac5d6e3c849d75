use bevy::{
    core_pipeline::{
        core_3d::graph::{Core3d, Node3d},
        fullscreen_vertex_shader::fullscreen_shader_vertex_state,
    },
    ecs::query::QueryItem,
    prelude::*,
    render::{
        RenderApp,
        extract_component::{
            ComponentUniforms, DynamicUniformIndex, ExtractComponent, ExtractComponentPlugin,
            UniformComponentPlugin,
        },
        render_graph::{
            NodeRunError, RenderGraphApp, RenderGraphContext, RenderLabel, ViewNode, ViewNodeRunner,
        },
        render_resource::{
            binding_types::{sampler, texture_2d, uniform_buffer},
            *,
        },
        renderer::{RenderContext, RenderDevice},
        view::ViewTarget,
    },
};
use constants::input::{BORDER_CURVATURE_MAX, BORDER_CURVATURE_RANGE, BORDER_CURVATURE_RELAX};

use crate::engine::camera::border_pull::Edge;
use crate::engine::events::{BorderDragEvent, FrameUpdateEvent};

const BORDER_CURVATURE_SHADER_PATH: &str = "shaders/border_curvature.wgsl";

/// Bends the photo layer toward whichever world edges are being pulled.
pub struct BorderCurvaturePlugin;

impl Plugin for BorderCurvaturePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ExtractComponentPlugin::<BorderCurvatureSettings>::default(),
            UniformComponentPlugin::<BorderCurvatureSettings>::default(),
        ))
        .init_resource::<BorderCurvature>();

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app
            .add_render_graph_node::<ViewNodeRunner<BorderCurvatureNode>>(
                Core3d,
                BorderCurvatureLabel,
            )
            .add_render_graph_edges(
                Core3d,
                (
                    Node3d::Tonemapping,
                    BorderCurvatureLabel,
                    Node3d::EndMainPassPostProcessing,
                ),
            );
    }

    fn finish(&self, app: &mut App) {
        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app.init_resource::<BorderCurvaturePipeline>();
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
pub(crate) struct BorderCurvatureLabel;

/// Bend amount per edge, ordered top, right, bottom, left.
#[derive(Component, Default, Clone, Copy, ExtractComponent, ShaderType)]
pub struct BorderCurvatureSettings {
    pub edges: Vec4,
}

/// Main-world curvature amounts, driven by border drag offsets.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct BorderCurvature {
    edges: [f32; 4],
}

impl BorderCurvature {
    pub fn amount(&self, edge: Edge) -> f32 {
        self.edges[edge.index()]
    }

    /// Bend `edge` in proportion to how far the pointer travelled past it.
    pub fn pull(&mut self, edge: Edge, offset: f32) {
        self.edges[edge.index()] = curvature_for_offset(offset);
    }

    /// Ease every edge not in `held` back toward flat.
    pub fn relax(&mut self, delta: f32, held: &[Edge]) {
        let decay = (-BORDER_CURVATURE_RELAX * delta.max(0.0)).exp();
        for edge in Edge::ALL {
            if held.contains(&edge) {
                continue;
            }
            let amount = &mut self.edges[edge.index()];
            *amount *= decay;
            if *amount < 1e-4 {
                *amount = 0.0;
            }
        }
    }

    pub fn as_vec4(&self) -> Vec4 {
        Vec4::from_array(self.edges)
    }
}

pub fn curvature_for_offset(offset: f32) -> f32 {
    (offset.max(0.0) / BORDER_CURVATURE_RANGE).min(1.0) * BORDER_CURVATURE_MAX
}

/// Feed border drag offsets into the curvature and relax released edges.
pub fn accumulate_border_curvature(
    mut drags: EventReader<BorderDragEvent>,
    mut frames: EventReader<FrameUpdateEvent>,
    mut curvature: ResMut<BorderCurvature>,
) {
    let mut held = Vec::new();
    for drag in drags.read() {
        curvature.pull(drag.edge, drag.offset);
        held.push(drag.edge);
    }

    let delta: f32 = frames.read().map(|frame| frame.delta).sum();
    if delta > 0.0 {
        curvature.relax(delta, &held);
    }
}

#[derive(Default)]
struct BorderCurvatureNode;

impl ViewNode for BorderCurvatureNode {
    type ViewQuery = (
        &'static ViewTarget,
        &'static BorderCurvatureSettings,
        &'static DynamicUniformIndex<BorderCurvatureSettings>,
    );

    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        (view_target, curvature_settings, settings_index): QueryItem<Self::ViewQuery>,
        world: &World,
    ) -> Result<(), NodeRunError> {
        if curvature_settings.edges.max_element() <= 0.0 {
            return Ok(());
        }

        let curvature_pipeline = world.resource::<BorderCurvaturePipeline>();
        let pipeline_cache = world.resource::<PipelineCache>();

        let Some(pipeline) = pipeline_cache.get_render_pipeline(curvature_pipeline.pipeline_id)
        else {
            return Ok(());
        };

        let settings_uniforms = world.resource::<ComponentUniforms<BorderCurvatureSettings>>();
        let Some(settings_binding) = settings_uniforms.uniforms().binding() else {
            return Ok(());
        };

        let post_process = view_target.post_process_write();

        let bind_group = render_context.render_device().create_bind_group(
            "border_curvature_bind_group",
            &curvature_pipeline.layout,
            &BindGroupEntries::sequential((
                post_process.source,
                &curvature_pipeline.sampler,
                settings_binding.clone(),
            )),
        );

        let mut render_pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
            label: Some("border_curvature_pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: post_process.destination,
                resolve_target: None,
                ops: Operations::default(),
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_render_pipeline(pipeline);
        render_pass.set_bind_group(0, &bind_group, &[settings_index.index()]);
        render_pass.draw(0..3, 0..1);

        Ok(())
    }
}

#[derive(Resource)]
struct BorderCurvaturePipeline {
    layout: BindGroupLayout,
    sampler: Sampler,
    pipeline_id: CachedRenderPipelineId,
}

impl FromWorld for BorderCurvaturePipeline {
    fn from_world(world: &mut World) -> Self {
        let render_device = world.resource::<RenderDevice>();

        let layout = render_device.create_bind_group_layout(
            "border_curvature_bind_group_layout",
            &BindGroupLayoutEntries::sequential(
                ShaderStages::FRAGMENT,
                (
                    texture_2d(TextureSampleType::Float { filterable: true }),
                    sampler(SamplerBindingType::Filtering),
                    uniform_buffer::<BorderCurvatureSettings>(true),
                ),
            ),
        );

        let sampler = render_device.create_sampler(&SamplerDescriptor {
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            ..default()
        });

        let shader = world.load_asset(BORDER_CURVATURE_SHADER_PATH);

        let pipeline_id =
            world
                .resource_mut::<PipelineCache>()
                .queue_render_pipeline(RenderPipelineDescriptor {
                    label: Some("border_curvature_pipeline".into()),
                    layout: vec![layout.clone()],
                    vertex: fullscreen_shader_vertex_state(),
                    fragment: Some(FragmentState {
                        shader,
                        shader_defs: vec![],
                        entry_point: "fragment".into(),
                        targets: vec![Some(ColorTargetState {
                            format: TextureFormat::bevy_default(),
                            blend: None,
                            write_mask: ColorWrites::ALL,
                        })],
                    }),
                    primitive: PrimitiveState::default(),
                    depth_stencil: None,
                    multisample: MultisampleState::default(),
                    push_constant_ranges: vec![],
                    zero_initialize_workgroup_memory: false,
                });

        Self {
            layout,
            sampler,
            pipeline_id,
        }
    }
}
